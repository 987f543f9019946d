//! Expense and recurring expense models
//!
//! An expense is a single recorded outflow on a specific date. A recurring
//! expense is a template for a monthly expense that is turned into concrete
//! expenses on demand.
//!
//! Both reference their category by display name, not by id.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{ExpenseId, RecurringExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Calendar date the money was spent
    pub date: NaiveDate,

    /// Category display name
    pub category: String,

    /// Subcategory within the category
    #[serde(default)]
    pub subcategory: String,

    /// Free-form note
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// When the expense was recorded
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense recorded now
    pub fn new(
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            category: category.into(),
            subcategory: subcategory.into(),
            description: normalize_description(description),
            timestamp: recorded_now(),
        }
    }

    /// Description or an empty string
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// A monthly expense template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringExpense {
    /// Unique identifier
    pub id: RecurringExpenseId,

    /// Amount charged every month
    pub amount: Money,

    /// Category display name
    pub category: String,

    /// Subcategory within the category
    #[serde(default)]
    pub subcategory: String,

    /// Free-form note
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl RecurringExpense {
    /// Create a new recurring expense template
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: RecurringExpenseId::new(),
            amount,
            category: category.into(),
            subcategory: subcategory.into(),
            description: normalize_description(description),
        }
    }
}

/// Current time at the millisecond precision timestamps are stored with
pub fn recorded_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Treat blank descriptions as absent
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_description(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            Money::from_units(50),
            june(3),
            "Mercado",
            "Comida",
            Some("  ".into()),
        );
        assert_eq!(expense.category, "Mercado");
        assert!(expense.description.is_none());
        assert_eq!(expense.description_or_empty(), "");
    }

    #[test]
    fn test_reads_stored_format() {
        let json = r#"{
            "id": "7f1c",
            "amount": 15000,
            "date": "2024-06-15",
            "category": "Movilidad",
            "subcategory": "Taxis",
            "description": "",
            "timestamp": 1718467200000
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_str(), "7f1c");
        assert_eq!(expense.amount, Money::from_units(15000));
        assert_eq!(expense.date, june(15));
        assert!(expense.description.is_none());
        assert_eq!(expense.timestamp.timestamp_millis(), 1718467200000);
    }

    #[test]
    fn test_writes_stored_format() {
        let mut expense = Expense::new(
            Money::from_cents(1250),
            june(1),
            "Gustos",
            "Postres",
            Some("Helado".into()),
        );
        expense.id = ExpenseId::from("abc");

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["date"], "2024-06-01");
        assert_eq!(value["description"], "Helado");
        assert!(value["timestamp"].is_i64());
    }

    #[test]
    fn test_new_expense_survives_storage_unchanged() {
        let expense = Expense::new(Money::from_cents(999), june(2), "Gustos", "Snacks", None);
        let json = serde_json::to_string(&expense).unwrap();
        let parsed: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, expense);
    }

    #[test]
    fn test_recurring_without_description() {
        let json = r#"{"id": "r1", "amount": 100, "category": "Mercado", "subcategory": "Comida"}"#;
        let recurring: RecurringExpense = serde_json::from_str(json).unwrap();
        assert_eq!(recurring.amount, Money::from_units(100));
        assert!(recurring.description.is_none());
    }
}
