//! Full-store snapshot used for backup and restore
//!
//! The JSON layout is the backup file format:
//!
//! ```json
//! {
//!   "expenses": [...],
//!   "categories": [...],
//!   "recurringExpenses": [...],
//!   "version": 1,
//!   "exportedAt": "2024-06-15T10:00:00.000Z"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CategoryDefinition;
use super::expense::{Expense, RecurringExpense};

/// Current backup format version
pub const BACKUP_FORMAT_VERSION: u32 = 1;

/// Complete exported state of the three stored collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub expenses: Vec<Expense>,
    pub categories: Vec<CategoryDefinition>,
    pub recurring_expenses: Vec<RecurringExpense>,
    pub version: u32,
    pub exported_at: DateTime<Utc>,
}

impl AppData {
    /// Bundle the given collections with the current format version and time
    pub fn new(
        expenses: Vec<Expense>,
        categories: Vec<CategoryDefinition>,
        recurring_expenses: Vec<RecurringExpense>,
    ) -> Self {
        Self {
            expenses,
            categories,
            recurring_expenses,
            version: BACKUP_FORMAT_VERSION,
            exported_at: Utc::now(),
        }
    }
}

/// Snapshot being restored; any collection may be absent
///
/// Absent collections are left untouched by an import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportData {
    #[serde(default)]
    pub expenses: Option<Vec<Expense>>,
    #[serde(default)]
    pub categories: Option<Vec<CategoryDefinition>>,
    #[serde(default)]
    pub recurring_expenses: Option<Vec<RecurringExpense>>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub exported_at: Option<String>,
}

impl ImportData {
    /// Names of the collections this snapshot will overwrite
    pub fn present_collections(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.expenses.is_some() {
            present.push("expenses");
        }
        if self.categories.is_some() {
            present.push("categories");
        }
        if self.recurring_expenses.is_some() {
            present.push("recurring expenses");
        }
        present
    }
}

impl From<AppData> for ImportData {
    fn from(data: AppData) -> Self {
        Self {
            expenses: Some(data.expenses),
            categories: Some(data.categories),
            recurring_expenses: Some(data.recurring_expenses),
            version: Some(data.version),
            exported_at: Some(data.exported_at.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::default_categories;

    #[test]
    fn test_serializes_camel_case() {
        let data = AppData::new(Vec::new(), default_categories(), Vec::new());
        let value = serde_json::to_value(&data).unwrap();

        assert!(value["expenses"].is_array());
        assert!(value["recurringExpenses"].is_array());
        assert_eq!(value["version"], 1);
        assert!(value["exportedAt"].is_string());
    }

    #[test]
    fn test_import_data_tolerates_missing_fields() {
        let data: ImportData = serde_json::from_str(r#"{"expenses": []}"#).unwrap();
        assert_eq!(data.expenses, Some(Vec::new()));
        assert!(data.categories.is_none());
        assert!(data.recurring_expenses.is_none());
        assert_eq!(data.present_collections(), vec!["expenses"]);
    }

    #[test]
    fn test_from_app_data_marks_everything_present() {
        let data = AppData::new(Vec::new(), Vec::new(), Vec::new());
        let import: ImportData = data.into();
        assert_eq!(import.present_collections().len(), 3);
        assert_eq!(import.version, Some(BACKUP_FORMAT_VERSION));
    }
}
