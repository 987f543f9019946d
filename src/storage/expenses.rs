//! Expense repository
//!
//! Expenses are kept newest-insert-first: single adds and batches are
//! prepended ahead of what is already stored.

use std::sync::Arc;

use super::collection::JsonCollection;
use super::store::KeyValueStore;
use crate::error::GastosError;
use crate::models::{Expense, ExpenseId};

/// Storage key for the expense list
pub const EXPENSES_KEY: &str = "gastos_app_data";

/// Repository for expense persistence
pub struct ExpenseRepository {
    collection: JsonCollection<Expense>,
}

impl ExpenseRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: JsonCollection::new(store, EXPENSES_KEY),
        }
    }

    /// Load all expenses; empty when nothing usable is stored
    pub fn load(&self) -> Vec<Expense> {
        self.collection.load()
    }

    /// Replace the whole list
    pub fn save(&self, expenses: Vec<Expense>) -> Result<Vec<Expense>, GastosError> {
        self.collection.save(expenses)
    }

    /// Prepend one expense
    pub fn add(&self, expense: Expense) -> Result<Vec<Expense>, GastosError> {
        self.append_batch(vec![expense])
    }

    /// Prepend a batch, keeping the batch's own order
    pub fn append_batch(&self, batch: Vec<Expense>) -> Result<Vec<Expense>, GastosError> {
        let mut merged = batch;
        merged.extend(self.load());
        self.save(merged)
    }

    /// Remove the expense with `id`, returning the remainder
    ///
    /// Deleting an id that is not stored rewrites the list unchanged.
    pub fn delete(&self, id: &ExpenseId) -> Result<Vec<Expense>, GastosError> {
        let remaining: Vec<Expense> = self.load().into_iter().filter(|e| &e.id != id).collect();
        self.save(remaining)
    }

    /// Get an expense by id
    pub fn get(&self, id: &ExpenseId) -> Option<Expense> {
        self.load().into_iter().find(|e| &e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::store::MemoryStore;
    use chrono::NaiveDate;

    fn repo() -> ExpenseRepository {
        ExpenseRepository::new(Arc::new(MemoryStore::new()))
    }

    fn expense(id: &str, units: i64) -> Expense {
        let mut expense = Expense::new(
            Money::from_units(units),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            "Mercado",
            "Comida",
            None,
        );
        expense.id = ExpenseId::from(id);
        expense
    }

    fn ids(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let repo = repo();
        repo.add(expense("a", 1)).unwrap();
        let all = repo.add(expense("b", 2)).unwrap();

        assert_eq!(ids(&all), vec!["b", "a"]);
        assert_eq!(ids(&repo.load()), vec!["b", "a"]);
    }

    #[test]
    fn test_append_batch_goes_first_in_order() {
        let repo = repo();
        repo.save(vec![expense("old", 1)]).unwrap();

        let all = repo
            .append_batch(vec![expense("n1", 2), expense("n2", 3)])
            .unwrap();
        assert_eq!(ids(&all), vec!["n1", "n2", "old"]);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let repo = repo();
        let before = vec![expense("a", 1), expense("b", 2), expense("c", 3)];
        repo.save(before.clone()).unwrap();

        let target = expense("x", 9);
        repo.add(target.clone()).unwrap();
        let after = repo.delete(&target.id).unwrap();

        assert_eq!(after, before);
        assert_eq!(repo.load(), before);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let repo = repo();
        repo.save(vec![expense("a", 1)]).unwrap();
        let after = repo.delete(&ExpenseId::from("zzz")).unwrap();
        assert_eq!(ids(&after), vec!["a"]);
    }

    #[test]
    fn test_get() {
        let repo = repo();
        repo.save(vec![expense("a", 1), expense("b", 2)]).unwrap();
        assert_eq!(repo.get(&ExpenseId::from("b")).unwrap().amount, Money::from_units(2));
        assert!(repo.get(&ExpenseId::from("c")).is_none());
    }
}
