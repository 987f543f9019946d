//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use super::confirm;
use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::GastosPaths;
use crate::config::settings::Settings;
use crate::error::GastosResult;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups
    List,

    /// Restore from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,
    },

    /// Delete old backups according to retention policy
    Prune,
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    paths: &GastosPaths,
    settings: &Settings,
    cmd: BackupCommands,
    assume_yes: bool,
) -> GastosResult<()> {
    let manager = BackupManager::new(paths, settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => {
            let backup_path = manager.create_backup(storage)?;
            println!("Backup created: {}", backup_path.display());
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: gastos backup create");
                return Ok(());
            }

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);
                println!(
                    "  {}. {} ({} ago, {})",
                    i + 1,
                    backup.filename,
                    format_duration(age),
                    format_size(backup.size_bytes),
                );
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup } => {
            let backup_path = manager.resolve(&backup)?;
            let restore_manager = RestoreManager::new(storage, &manager);
            let data = restore_manager.validate_file(&backup_path)?;

            println!("Backup: {}", backup_path.display());
            println!("Contains: {}", data.present_collections().join(", "));
            println!();

            if !confirm("Overwrite current data with this backup?", assume_yes)? {
                println!("Restore cancelled.");
                return Ok(());
            }

            let result = restore_manager.restore(&data)?;
            if let Some(safety) = &result.safety_backup {
                println!("Previous data saved to: {}", safety.display());
            }
            println!("{}", result.summary());
        }

        BackupCommands::Prune => {
            let backups = manager.list_backups()?;
            let keep = settings.backup_retention.keep_count as usize;
            let to_delete = backups.len().saturating_sub(keep);

            if to_delete == 0 {
                println!("No backups to prune.");
                println!("Keeping up to {} backup(s); you have {}.", keep, backups.len());
                return Ok(());
            }

            let question = format!(
                "Delete {} of {} backup(s), keeping the newest {}?",
                to_delete,
                backups.len(),
                keep
            );
            if !confirm(&question, assume_yes)? {
                println!("Prune cancelled.");
                return Ok(());
            }

            let deleted = manager.enforce_retention()?;
            println!("Deleted {} backup(s).", deleted.len());
        }
    }

    Ok(())
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours();
    let minutes = duration.num_minutes();

    if days > 0 {
        format!("{}d", days)
    } else if hours > 0 {
        format!("{}h", hours)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        "just now".to_string()
    }
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::days(3)), "3d");
        assert_eq!(format_duration(chrono::Duration::hours(5)), "5h");
        assert_eq!(format_duration(chrono::Duration::seconds(20)), "just now");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
