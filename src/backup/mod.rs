//! Backup system for Gastos
//!
//! # Architecture
//!
//! - `snapshot`: reading, validating and writing backup files
//! - `BackupManager`: timestamped safety backups with retention
//! - `RestoreManager`: validates a file, snapshots, then overwrites
//!
//! # Backup Format
//!
//! Backups are `AppData` JSON documents (`expenses`, `categories`,
//! `recurringExpenses`, `version`, `exportedAt`). Only `expenses` and
//! `categories` are required when reading one back.
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos_cli::backup::{BackupManager, RestoreManager};
//!
//! let backups = BackupManager::new(&paths, settings.backup_retention.clone());
//! let result = RestoreManager::new(&storage, &backups).restore_from_file(&path)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;
mod snapshot;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult};
pub use snapshot::{default_export_filename, parse_backup, read_backup_file, write_export};
