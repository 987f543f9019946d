//! Recurring expense template repository

use std::sync::Arc;

use super::collection::JsonCollection;
use super::store::KeyValueStore;
use crate::error::GastosError;
use crate::models::RecurringExpense;

/// Storage key for the recurring template list
pub const RECURRING_KEY: &str = "gastos_app_recurring";

/// Repository for recurring expense templates
pub struct RecurringRepository {
    collection: JsonCollection<RecurringExpense>,
}

impl RecurringRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: JsonCollection::new(store, RECURRING_KEY),
        }
    }

    pub fn load(&self) -> Vec<RecurringExpense> {
        self.collection.load()
    }

    pub fn save(
        &self,
        recurring: Vec<RecurringExpense>,
    ) -> Result<Vec<RecurringExpense>, GastosError> {
        self.collection.save(recurring)
    }
}
