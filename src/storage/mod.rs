//! Storage layer for Gastos
//!
//! Three independent collections (expenses, categories and recurring
//! templates) live in a key-value store under fixed keys. Each collection
//! is written whole and atomically; writes to different collections are not
//! coordinated.

pub mod categories;
pub mod collection;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod recurring;
pub mod store;

pub use categories::{CategoryRepository, CATEGORIES_KEY};
pub use expenses::{ExpenseRepository, EXPENSES_KEY};
pub use file_io::{read_text, write_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use recurring::{RecurringRepository, RECURRING_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use tracing::info;

use crate::config::paths::GastosPaths;
use crate::error::GastosError;
use crate::models::{AppData, ImportData};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: Option<GastosPaths>,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
    pub recurring: RecurringRepository,
}

impl Storage {
    /// Open the on-disk store under `paths`
    pub fn new(paths: GastosPaths) -> Result<Self, GastosError> {
        paths.ensure_directories()?;

        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(paths.data_dir()));
        let mut storage = Self::with_store(store);
        storage.paths = Some(paths);
        Ok(storage)
    }

    /// Build a storage over any key-value store
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            paths: None,
            expenses: ExpenseRepository::new(store.clone()),
            categories: CategoryRepository::new(store.clone()),
            recurring: RecurringRepository::new(store),
        }
    }

    /// A storage backed by memory only
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Paths of the on-disk store, if any
    pub fn paths(&self) -> Option<&GastosPaths> {
        self.paths.as_ref()
    }

    /// Snapshot of all three collections
    pub fn export_all(&self) -> AppData {
        AppData::new(
            self.expenses.load(),
            self.categories.load(),
            self.recurring.load(),
        )
    }

    /// Overwrite each collection present in `data`
    ///
    /// Absent collections are left as they are. Collections are written one
    /// after another; a failure leaves earlier ones already replaced.
    pub fn import_all(&self, data: &ImportData) -> Result<(), GastosError> {
        if let Some(expenses) = &data.expenses {
            self.expenses.save(expenses.clone())?;
        }
        if let Some(categories) = &data.categories {
            self.categories.save(categories.clone())?;
        }
        if let Some(recurring) = &data.recurring_expenses {
            self.recurring.save(recurring.clone())?;
        }

        info!(
            collections = ?data.present_collections(),
            "imported snapshot"
        );
        Ok(())
    }
}
