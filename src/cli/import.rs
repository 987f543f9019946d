//! CLI command handler for JSON backup import
//!
//! The file is validated before anything is written. Every collection the
//! file carries replaces the stored one, after a safety backup.

use std::path::Path;

use super::confirm;
use crate::backup::{read_backup_file, BackupManager, RestoreManager};
use crate::config::paths::GastosPaths;
use crate::config::settings::Settings;
use crate::error::GastosResult;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import(
    storage: &Storage,
    paths: &GastosPaths,
    settings: &Settings,
    file: &Path,
    assume_yes: bool,
) -> GastosResult<()> {
    let data = read_backup_file(file)?;

    println!("Import from: {}", file.display());
    if let Some(exported_at) = &data.exported_at {
        println!("  Exported at: {}", exported_at);
    }
    if let Some(expenses) = &data.expenses {
        println!("  Expenses:           {}", expenses.len());
    }
    if let Some(categories) = &data.categories {
        println!("  Categories:         {}", categories.len());
    }
    if let Some(recurring) = &data.recurring_expenses {
        println!("  Recurring expenses: {}", recurring.len());
    }
    println!();

    let question = format!(
        "This replaces the stored {}. Continue?",
        data.present_collections().join(", ")
    );
    if !confirm(&question, assume_yes)? {
        println!("Import cancelled.");
        return Ok(());
    }

    let backups = BackupManager::new(paths, settings.backup_retention.clone());
    let result = RestoreManager::new(storage, &backups).restore(&data)?;

    if let Some(safety) = &result.safety_backup {
        println!("Previous data saved to: {}", safety.display());
    }
    println!("{}", result.summary());
    Ok(())
}
