//! Reports module for Gastos
//!
//! Pure aggregation over stored expenses: monthly totals and the
//! per-category breakdown.

pub mod monthly;

pub use monthly::{by_category, monthly_total, BreakdownRow, CategoryTotal, MonthlySummary};
