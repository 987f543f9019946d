//! Recurring expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::{Money, RecurringExpense};

#[derive(Tabled)]
struct RecurringRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Subcategory")]
    subcategory: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format recurring templates as a table followed by their monthly total
pub fn format_recurring_list(recurring: &[RecurringExpense], currency_symbol: &str) -> String {
    if recurring.is_empty() {
        return "No recurring expenses defined.".to_string();
    }

    let rows = recurring.iter().map(|r| RecurringRow {
        id: r.id.short().to_string(),
        category: r.category.clone(),
        subcategory: r.subcategory.clone(),
        description: truncate(r.description.as_deref().unwrap_or(""), 30),
        amount: r.amount.format_with_symbol(currency_symbol),
    });

    let total: Money = recurring.iter().map(|r| r.amount).sum();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!(
        "{}\nMonthly total: {}",
        table,
        total.format_with_symbol(currency_symbol)
    )
}
