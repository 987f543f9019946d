//! Core data models for Gastos
//!
//! Plain records for expenses, recurring expense templates, category
//! definitions and the backup snapshot, plus the `Money` and `YearMonth`
//! value types they are built from.

pub mod app_data;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use app_data::{AppData, ImportData, BACKUP_FORMAT_VERSION};
pub use category::{default_categories, CategoryDefinition, AVAILABLE_ICONS};
pub use expense::{Expense, RecurringExpense};
pub use ids::{CategoryId, ExpenseId, RecurringExpenseId};
pub use money::Money;
pub use month::YearMonth;
