//! Service layer for Gastos
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, category resolution and recurring generation.

pub mod category;
pub mod expense;
pub mod recurring;

pub use category::{CategoryService, CategoryUpdate, UpdatedCategory};
pub use expense::{ExpenseService, NewExpense};
pub use recurring::{materialize, NewRecurring, RecurringService, RECURRING_PLACEHOLDER};
