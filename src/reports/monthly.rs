//! Monthly aggregation
//!
//! Totals for one calendar month and the per-category breakdown behind the
//! summary view and the report prompt.

use std::collections::HashMap;

use crate::models::category::ORPHAN_COLOR;
use crate::models::{CategoryDefinition, Expense, Money, YearMonth};
use crate::services::expense::sort_newest_first;
use crate::storage::Storage;

/// Spending in one category for a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name as stored on the expenses
    pub name: String,
    pub total: Money,
    pub count: usize,
}

/// Sum of amounts of the expenses dated within `month`
pub fn monthly_total(expenses: &[Expense], month: YearMonth) -> Money {
    expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Per-category totals for `month`, omitting categories with a zero total
///
/// Categories come in definition order, followed by names found on the
/// month's expenses that match no definition, in order of first
/// appearance. The totals always add up to `monthly_total`.
pub fn by_category(
    expenses: &[Expense],
    categories: &[CategoryDefinition],
    month: YearMonth,
) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, (Money, usize)> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for expense in expenses.iter().filter(|e| month.contains(e.date)) {
        let entry = sums.entry(expense.category.as_str()).or_insert_with(|| {
            first_seen.push(expense.category.as_str());
            (Money::zero(), 0)
        });
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let defined = categories.iter().map(|c| c.name.as_str());
    let orphans = first_seen
        .iter()
        .copied()
        .filter(|name| !categories.iter().any(|c| c.name == *name));

    let mut rows = Vec::new();
    for name in defined.chain(orphans) {
        // A duplicated definition name must not be counted twice
        if let Some((total, count)) = sums.remove(name) {
            if !total.is_zero() {
                rows.push(CategoryTotal {
                    name: name.to_string(),
                    total,
                    count,
                });
            }
        }
    }
    rows
}

/// One row of the monthly breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub name: String,
    pub color: String,
    pub total: Money,
    pub count: usize,
    pub percentage: f64,
    /// No category definition carries this name
    pub orphaned: bool,
}

/// Everything the summary view shows for a month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub total: Money,
    pub count: usize,
    pub breakdown: Vec<BreakdownRow>,
    /// The month's expenses, newest first
    pub expenses: Vec<Expense>,
}

impl MonthlySummary {
    /// Build the summary from stored data
    pub fn generate(storage: &Storage, month: YearMonth) -> Self {
        Self::from_parts(&storage.expenses.load(), &storage.categories.load(), month)
    }

    /// Build the summary from already loaded collections
    pub fn from_parts(
        expenses: &[Expense],
        categories: &[CategoryDefinition],
        month: YearMonth,
    ) -> Self {
        let total = monthly_total(expenses, month);

        let breakdown = by_category(expenses, categories, month)
            .into_iter()
            .map(|row| {
                let definition = categories.iter().find(|c| c.name == row.name);
                BreakdownRow {
                    color: definition
                        .map(|c| c.color.clone())
                        .unwrap_or_else(|| ORPHAN_COLOR.to_string()),
                    orphaned: definition.is_none(),
                    percentage: row.total.percentage_of(total),
                    name: row.name,
                    total: row.total,
                    count: row.count,
                }
            })
            .collect();

        let mut month_expenses: Vec<Expense> = expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect();
        sort_newest_first(&mut month_expenses);

        Self {
            month,
            total,
            count: month_expenses.len(),
            breakdown,
            expenses: month_expenses,
        }
    }

    /// True when the month has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Summary: {}\n", self.month));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Expenses: {}\n\n", self.count));

        output.push_str(&format!(
            "{:<28} {:>14} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.breakdown {
            let name = if row.orphaned {
                format!("{} (deleted)", row.name)
            } else {
                row.name.clone()
            };
            output.push_str(&format!(
                "{:<28} {:>14} {:>6} {:>6.1}%\n",
                name,
                row.total.format_with_symbol(currency_symbol),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>14} {:>6}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol),
            self.count
        ));

        output
    }
}
