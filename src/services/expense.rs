//! Expense service
//!
//! Recording, listing and deleting expenses.

use chrono::NaiveDate;
use tracing::info;

use super::category::CategoryService;
use crate::error::{GastosError, GastosResult};
use crate::models::{Expense, Money, YearMonth};
use crate::storage::Storage;

/// Input for recording an expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Money,
    pub date: NaiveDate,
    /// Category name or id; the first category when absent
    pub category: Option<String>,
    /// Subcategory name; the category's first one when absent
    pub subcategory: Option<String>,
    pub description: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn record(&self, input: NewExpense) -> GastosResult<Expense> {
        if input.amount.is_negative() {
            return Err(GastosError::Validation(format!(
                "Amount cannot be negative: {}",
                input.amount
            )));
        }

        let (category, subcategory) = CategoryService::new(self.storage)
            .resolve(input.category.as_deref(), input.subcategory.as_deref())?;

        let expense = Expense::new(
            input.amount,
            input.date,
            category,
            subcategory,
            input.description,
        );
        self.storage.expenses.add(expense.clone())?;

        info!(
            id = %expense.id,
            amount = %expense.amount,
            category = %expense.category,
            "recorded expense"
        );
        Ok(expense)
    }

    /// All expenses, newest first
    pub fn list(&self) -> Vec<Expense> {
        let mut expenses = self.storage.expenses.load();
        sort_newest_first(&mut expenses);
        expenses
    }

    /// Expenses dated within `month`, newest first
    pub fn list_month(&self, month: YearMonth) -> Vec<Expense> {
        let mut expenses: Vec<_> = self
            .storage
            .expenses
            .load()
            .into_iter()
            .filter(|e| month.contains(e.date))
            .collect();
        sort_newest_first(&mut expenses);
        expenses
    }

    /// Find an expense by full id or an unambiguous id prefix
    pub fn find(&self, identifier: &str) -> GastosResult<Expense> {
        let identifier = identifier.trim();
        let expenses = self.storage.expenses.load();

        if let Some(expense) = expenses.iter().find(|e| e.id.as_str() == identifier) {
            return Ok(expense.clone());
        }

        if identifier.is_empty() {
            return Err(GastosError::expense_not_found(identifier));
        }

        let mut matches = expenses
            .into_iter()
            .filter(|e| e.id.as_str().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(GastosError::Validation(format!(
                "Expense id prefix '{}' is ambiguous; use more characters",
                identifier
            ))),
            (None, _) => Err(GastosError::expense_not_found(identifier)),
        }
    }

    /// Delete an expense, returning it
    pub fn delete(&self, identifier: &str) -> GastosResult<Expense> {
        let expense = self.find(identifier)?;
        self.storage.expenses.delete(&expense.id)?;

        info!(id = %expense.id, "deleted expense");
        Ok(expense)
    }
}

/// Sort by date, then recording time, most recent first
pub fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
}
