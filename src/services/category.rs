//! Category service
//!
//! Provides business logic for category management: CRUD on category
//! definitions, subcategory editing and resolving the category an expense
//! is filed under.

use tracing::{info, warn};

use crate::error::{GastosError, GastosResult};
use crate::models::category::{resolve_icon, AVAILABLE_ICONS};
use crate::models::{CategoryDefinition, CategoryId};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Fields to change on an existing category
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Result of updating a category
#[derive(Debug, Clone)]
pub struct UpdatedCategory {
    pub category: CategoryDefinition,
    /// Previous name, when the category was renamed
    pub renamed_from: Option<String>,
    /// Stored expenses still filed under the previous name
    pub orphaned_expenses: usize,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all categories in definition order
    pub fn list(&self) -> Vec<CategoryDefinition> {
        self.storage.categories.load()
    }

    /// Find a category by name (case-insensitive) or id
    pub fn find(&self, identifier: &str) -> Option<CategoryDefinition> {
        let categories = self.list();
        let wanted = identifier.trim().to_lowercase();

        if let Some(category) = categories
            .iter()
            .find(|c| c.name.trim().to_lowercase() == wanted)
        {
            return Some(category.clone());
        }

        categories
            .into_iter()
            .find(|c| c.id.as_str() == identifier.trim())
    }

    /// Find a category, failing when it doesn't exist
    pub fn get(&self, identifier: &str) -> GastosResult<CategoryDefinition> {
        self.find(identifier)
            .ok_or_else(|| GastosError::category_not_found(identifier))
    }

    /// The category new expenses fall into when none is named
    pub fn default_category(&self) -> Option<CategoryDefinition> {
        self.list().into_iter().next()
    }

    /// Resolve the category and subcategory an expense is filed under
    ///
    /// Without a category the first defined one is used. Without a
    /// subcategory the category's first one is used, or an empty string
    /// when it has none. A named subcategory must belong to the category
    /// unless the category defines no subcategories at all.
    pub fn resolve(
        &self,
        category: Option<&str>,
        subcategory: Option<&str>,
    ) -> GastosResult<(String, String)> {
        let definition = match category {
            Some(name) => self.get(name)?,
            None => self.default_category().ok_or_else(|| {
                GastosError::Validation(
                    "No categories defined; create one with `gastos category add`".into(),
                )
            })?,
        };

        let subcategory = match subcategory.map(str::trim).filter(|s| !s.is_empty()) {
            Some(sub) if definition.subcategories.is_empty() => sub.to_string(),
            Some(sub) => definition
                .find_subcategory(sub)
                .map(str::to_string)
                .ok_or_else(|| {
                    GastosError::Validation(format!(
                        "'{}' is not a subcategory of {} (expected one of: {})",
                        sub,
                        definition.name,
                        definition.subcategories.join(", ")
                    ))
                })?,
            None => definition.first_subcategory().unwrap_or_default().to_string(),
        };

        Ok((definition.name, subcategory))
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        color: Option<&str>,
        icon: Option<&str>,
        subcategories: Vec<String>,
    ) -> GastosResult<CategoryDefinition> {
        let name = name.trim();
        let mut categories = self.list();

        let name_lower = name.to_lowercase();
        if categories
            .iter()
            .any(|c| c.name.trim().to_lowercase() == name_lower)
        {
            return Err(GastosError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let mut category = CategoryDefinition::new(name);
        if let Some(color) = color {
            category.color = color.trim().to_lowercase();
        }
        if let Some(icon) = icon {
            category.icon = canonical_icon(icon)?;
        }
        for sub in subcategories {
            push_subcategory(&mut category, &sub)?;
        }

        category
            .validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        categories.push(category.clone());
        self.storage.categories.save(categories)?;

        info!(category = %category.name, id = %category.id, "created category");
        Ok(category)
    }

    /// Update a category's name, color or icon
    ///
    /// Renaming does not touch stored expenses; the count of expenses still
    /// filed under the old name is reported back.
    pub fn update(&self, identifier: &str, update: CategoryUpdate) -> GastosResult<UpdatedCategory> {
        let target = self.get(identifier)?;
        let mut categories = self.list();
        let mut category = target.clone();
        let mut renamed_from = None;

        if let Some(new_name) = update.name {
            let new_name = new_name.trim().to_string();
            if new_name.is_empty() {
                return Err(GastosError::Validation("Category name cannot be empty".into()));
            }

            if categories
                .iter()
                .any(|c| c.id != target.id && c.name.trim().to_lowercase() == new_name.to_lowercase())
            {
                return Err(GastosError::Duplicate {
                    entity_type: "Category",
                    identifier: new_name,
                });
            }

            if new_name != category.name {
                renamed_from = Some(std::mem::replace(&mut category.name, new_name));
            }
        }

        if let Some(color) = update.color {
            category.color = color.trim().to_lowercase();
        }
        if let Some(icon) = update.icon {
            category.icon = canonical_icon(&icon)?;
        }

        category
            .validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        replace_by_id(&mut categories, &category);
        self.storage.categories.save(categories)?;

        let orphaned_expenses = match &renamed_from {
            Some(old_name) => {
                let count = self.usage_count(old_name);
                if count > 0 {
                    warn!(
                        from = %old_name,
                        to = %category.name,
                        count,
                        "renamed category still referenced by stored expenses"
                    );
                }
                count
            }
            None => 0,
        };

        Ok(UpdatedCategory {
            category,
            renamed_from,
            orphaned_expenses,
        })
    }

    /// Append a subcategory
    pub fn add_subcategory(&self, identifier: &str, name: &str) -> GastosResult<CategoryDefinition> {
        let mut category = self.get(identifier)?;
        push_subcategory(&mut category, name)?;

        let mut categories = self.list();
        replace_by_id(&mut categories, &category);
        self.storage.categories.save(categories)?;
        Ok(category)
    }

    /// Remove a subcategory (case-insensitive match)
    pub fn remove_subcategory(
        &self,
        identifier: &str,
        name: &str,
    ) -> GastosResult<CategoryDefinition> {
        let mut category = self.get(identifier)?;
        let existing = category
            .find_subcategory(name)
            .map(str::to_string)
            .ok_or_else(|| GastosError::NotFound {
                entity_type: "Subcategory",
                identifier: format!("{} / {}", category.name, name.trim()),
            })?;
        category.subcategories.retain(|s| *s != existing);

        let mut categories = self.list();
        replace_by_id(&mut categories, &category);
        self.storage.categories.save(categories)?;
        Ok(category)
    }

    /// Delete a category
    ///
    /// Expenses filed under it keep their category name.
    pub fn delete(&self, identifier: &str) -> GastosResult<CategoryDefinition> {
        let category = self.get(identifier)?;
        self.delete_by_id(&category.id)
    }

    /// Delete the category with exactly this id
    pub fn delete_by_id(&self, id: &CategoryId) -> GastosResult<CategoryDefinition> {
        let (removed, remaining): (Vec<_>, Vec<_>) =
            self.list().into_iter().partition(|c| &c.id == id);
        let category = removed
            .into_iter()
            .next()
            .ok_or_else(|| GastosError::category_not_found(id.as_str()))?;
        self.storage.categories.save(remaining)?;

        info!(category = %category.name, id = %category.id, "deleted category");
        Ok(category)
    }

    /// Number of stored expenses filed under `name`
    pub fn usage_count(&self, name: &str) -> usize {
        self.storage
            .expenses
            .load()
            .iter()
            .filter(|e| e.category == name)
            .count()
    }
}

fn canonical_icon(icon: &str) -> GastosResult<String> {
    resolve_icon(icon).map(str::to_string).ok_or_else(|| {
        GastosError::Validation(format!(
            "Unknown icon '{}'. Available: {}",
            icon.trim(),
            AVAILABLE_ICONS.join(", ")
        ))
    })
}

fn push_subcategory(category: &mut CategoryDefinition, name: &str) -> GastosResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GastosError::Validation("Subcategory name cannot be empty".into()));
    }
    if category.find_subcategory(name).is_some() {
        return Err(GastosError::Duplicate {
            entity_type: "Subcategory",
            identifier: format!("{} / {}", category.name, name),
        });
    }
    category.subcategories.push(name.to_string());
    Ok(())
}

fn replace_by_id(categories: &mut [CategoryDefinition], updated: &CategoryDefinition) {
    if let Some(slot) = categories.iter_mut().find(|c| c.id == updated.id) {
        *slot = updated.clone();
    }
}
