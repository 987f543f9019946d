//! Backup restoration for Gastos
//!
//! Restoring validates the file first, snapshots the current store into the
//! backups directory, then overwrites each collection the file carries.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::GastosResult;
use crate::models::ImportData;
use crate::storage::Storage;

use super::manager::BackupManager;
use super::snapshot::read_backup_file;

/// What a restore replaced
#[derive(Debug, Clone, Default)]
pub struct RestoreResult {
    /// Number of expenses written, when the file carried them
    pub expenses: Option<usize>,
    pub categories: Option<usize>,
    pub recurring_expenses: Option<usize>,
    /// Snapshot taken before overwriting
    pub safety_backup: Option<PathBuf>,
}

impl RestoreResult {
    /// One-line description of what was restored
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(n) = self.expenses {
            parts.push(format!("{} expenses", n));
        }
        if let Some(n) = self.categories {
            parts.push(format!("{} categories", n));
        }
        if let Some(n) = self.recurring_expenses {
            parts.push(format!("{} recurring expenses", n));
        }

        if parts.is_empty() {
            "Nothing restored".to_string()
        } else {
            format!("Restored {}", parts.join(", "))
        }
    }
}

/// Handles restoring from backup files
pub struct RestoreManager<'a> {
    storage: &'a Storage,
    backups: &'a BackupManager,
}

impl<'a> RestoreManager<'a> {
    /// Create a new RestoreManager
    pub fn new(storage: &'a Storage, backups: &'a BackupManager) -> Self {
        Self { storage, backups }
    }

    /// Validate a backup file without touching the store
    pub fn validate_file(&self, path: &Path) -> GastosResult<ImportData> {
        read_backup_file(path)
    }

    /// Restore from a backup file
    ///
    /// An invalid file is rejected before anything is written.
    pub fn restore_from_file(&self, path: &Path) -> GastosResult<RestoreResult> {
        let data = read_backup_file(path)?;
        self.restore(&data)
    }

    /// Restore from an already validated snapshot
    pub fn restore(&self, data: &ImportData) -> GastosResult<RestoreResult> {
        let (safety_backup, pruned) = self.backups.create_backup_with_retention(self.storage)?;
        info!(
            path = %safety_backup.display(),
            pruned = pruned.len(),
            "created safety backup before restore"
        );

        self.storage.import_all(data)?;

        Ok(RestoreResult {
            expenses: data.expenses.as_ref().map(Vec::len),
            categories: data.categories.as_ref().map(Vec::len),
            recurring_expenses: data.recurring_expenses.as_ref().map(Vec::len),
            safety_backup: Some(safety_backup),
        })
    }
}
