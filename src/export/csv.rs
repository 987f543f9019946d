//! CSV export of expenses

use std::io::Write;

use serde::Serialize;

use crate::error::{GastosError, GastosResult};
use crate::models::{Expense, Money, YearMonth};
use crate::services::ExpenseService;
use crate::storage::Storage;

#[derive(Debug, Serialize)]
struct ExpenseRow<'a> {
    id: &'a str,
    date: String,
    category: &'a str,
    subcategory: &'a str,
    description: &'a str,
    amount: String,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_str(),
            date: expense.date.to_string(),
            category: &expense.category,
            subcategory: &expense.subcategory,
            description: expense.description_or_empty(),
            amount: plain_amount(expense.amount),
        }
    }
}

/// Amount with two decimals and no symbol or grouping, e.g. "1234.50"
fn plain_amount(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.units().abs(), amount.cents_part())
}

/// Write expenses as CSV, newest first, optionally limited to one month
///
/// Returns the number of rows written.
pub fn export_expenses_csv<W: Write>(
    storage: &Storage,
    writer: W,
    month: Option<YearMonth>,
) -> GastosResult<usize> {
    let service = ExpenseService::new(storage);
    let expenses = match month {
        Some(month) => service.list_month(month),
        None => service.list(),
    };

    // Header written by hand so it appears even when there are no rows
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["id", "date", "category", "subcategory", "description", "amount"])?;
    for expense in &expenses {
        csv_writer.serialize(ExpenseRow::from(expense))?;
    }
    csv_writer
        .flush()
        .map_err(|e| GastosError::Export(format!("Failed to write CSV: {}", e)))?;

    Ok(expenses.len())
}
