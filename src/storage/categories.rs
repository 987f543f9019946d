//! Category repository
//!
//! Falls back to the built-in category set when nothing usable is stored.

use std::sync::Arc;

use super::collection::JsonCollection;
use super::store::KeyValueStore;
use crate::error::GastosError;
use crate::models::{default_categories, CategoryDefinition};

/// Storage key for the category list
pub const CATEGORIES_KEY: &str = "gastos_app_categories";

/// Repository for category persistence
pub struct CategoryRepository {
    collection: JsonCollection<CategoryDefinition>,
}

impl CategoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: JsonCollection::with_fallback(store, CATEGORIES_KEY, default_categories),
        }
    }

    /// Load all categories in definition order
    pub fn load(&self) -> Vec<CategoryDefinition> {
        self.collection.load()
    }

    /// Replace the whole list
    pub fn save(
        &self,
        categories: Vec<CategoryDefinition>,
    ) -> Result<Vec<CategoryDefinition>, GastosError> {
        self.collection.save(categories)
    }
}
