//! Export module for Gastos
//!
//! - CSV: expenses for spreadsheets
//! - JSON: full backup documents (see [`crate::backup::write_export`])

pub mod csv;

pub use self::csv::export_expenses_csv;
