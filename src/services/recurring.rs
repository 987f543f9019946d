//! Recurring expense service
//!
//! Manages the monthly templates and turns them into dated expenses.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use super::category::CategoryService;
use crate::error::{GastosError, GastosResult};
use crate::models::expense::recorded_now;
use crate::models::{Expense, ExpenseId, Money, RecurringExpense};
use crate::storage::Storage;

/// Description given to generated expenses whose template has none
pub const RECURRING_PLACEHOLDER: &str = "Gasto Fijo Mensual";

/// Input for a new recurring template
#[derive(Debug, Clone)]
pub struct NewRecurring {
    pub amount: Money,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub description: Option<String>,
}

/// Turn each template into an expense dated `on_date`
///
/// Ids come from `next_id`, one call per template, in template order.
/// Nothing is persisted.
pub fn materialize<F>(
    recurring: &[RecurringExpense],
    on_date: NaiveDate,
    now: DateTime<Utc>,
    mut next_id: F,
) -> Vec<Expense>
where
    F: FnMut() -> ExpenseId,
{
    recurring
        .iter()
        .map(|template| Expense {
            id: next_id(),
            amount: template.amount,
            date: on_date,
            category: template.category.clone(),
            subcategory: template.subcategory.clone(),
            description: Some(
                template
                    .description
                    .clone()
                    .unwrap_or_else(|| RECURRING_PLACEHOLDER.to_string()),
            ),
            timestamp: now,
        })
        .collect()
}

/// Service for recurring expense templates
pub struct RecurringService<'a> {
    storage: &'a Storage,
}

impl<'a> RecurringService<'a> {
    /// Create a new recurring service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All templates in the order they were added
    pub fn list(&self) -> Vec<RecurringExpense> {
        self.storage.recurring.load()
    }

    /// Sum of all template amounts
    pub fn monthly_total(&self) -> Money {
        self.list().iter().map(|r| r.amount).sum()
    }

    /// Add a template
    pub fn add(&self, input: NewRecurring) -> GastosResult<RecurringExpense> {
        if input.amount.is_negative() {
            return Err(GastosError::Validation(format!(
                "Amount cannot be negative: {}",
                input.amount
            )));
        }

        let (category, subcategory) = CategoryService::new(self.storage)
            .resolve(input.category.as_deref(), input.subcategory.as_deref())?;

        let template = RecurringExpense::new(input.amount, category, subcategory, input.description);
        let mut all = self.list();
        all.push(template.clone());
        self.storage.recurring.save(all)?;

        info!(id = %template.id, amount = %template.amount, "added recurring expense");
        Ok(template)
    }

    /// Find a template by full id or an unambiguous id prefix
    pub fn find(&self, identifier: &str) -> GastosResult<RecurringExpense> {
        let identifier = identifier.trim();
        let all = self.list();

        if let Some(found) = all.iter().find(|r| r.id.as_str() == identifier) {
            return Ok(found.clone());
        }

        if identifier.is_empty() {
            return Err(GastosError::recurring_not_found(identifier));
        }

        let mut matches = all
            .into_iter()
            .filter(|r| r.id.as_str().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(found),
            (Some(_), Some(_)) => Err(GastosError::Validation(format!(
                "Recurring id prefix '{}' is ambiguous; use more characters",
                identifier
            ))),
            (None, _) => Err(GastosError::recurring_not_found(identifier)),
        }
    }

    /// Delete a template, returning it
    pub fn delete(&self, identifier: &str) -> GastosResult<RecurringExpense> {
        let template = self.find(identifier)?;
        let remaining: Vec<_> = self
            .list()
            .into_iter()
            .filter(|r| r.id != template.id)
            .collect();
        self.storage.recurring.save(remaining)?;

        info!(id = %template.id, "deleted recurring expense");
        Ok(template)
    }

    /// Record one expense per template, dated `on_date`
    ///
    /// The new expenses are stored ahead of existing ones. With no templates
    /// nothing is written and an empty list is returned.
    pub fn generate(&self, on_date: NaiveDate) -> GastosResult<Vec<Expense>> {
        let templates = self.list();
        if templates.is_empty() {
            return Ok(Vec::new());
        }

        let generated = materialize(&templates, on_date, recorded_now(), ExpenseId::new);
        self.storage.expenses.append_batch(generated.clone())?;

        info!(count = generated.len(), date = %on_date, "generated recurring expenses");
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecurringExpenseId;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn template(units: i64, description: Option<&str>) -> RecurringExpense {
        RecurringExpense::new(
            Money::from_units(units),
            "Mercado",
            "Comida",
            description.map(str::to_string),
        )
    }

    #[test]
    fn test_materialize_placeholder_and_fresh_id() {
        let mut recurring = template(100, None);
        recurring.id = RecurringExpenseId::from("tpl-1");
        let now = Utc::now();

        let mut counter = 0;
        let generated = materialize(&[recurring.clone()], june_15(), now, || {
            counter += 1;
            ExpenseId::from(format!("gen-{}", counter))
        });

        assert_eq!(generated.len(), 1);
        let expense = &generated[0];
        assert_eq!(expense.amount, Money::from_units(100));
        assert_eq!(expense.date, june_15());
        assert_eq!(expense.category, "Mercado");
        assert_eq!(expense.subcategory, "Comida");
        assert_eq!(expense.description.as_deref(), Some(RECURRING_PLACEHOLDER));
        assert_eq!(expense.id.as_str(), "gen-1");
        assert_ne!(expense.id.as_str(), recurring.id.as_str());
        assert_eq!(expense.timestamp, now);
    }

    #[test]
    fn test_materialize_keeps_description_and_order() {
        let templates = vec![template(1, Some("Netflix")), template(2, None)];
        let generated = materialize(&templates, june_15(), Utc::now(), ExpenseId::new);

        assert_eq!(generated[0].description.as_deref(), Some("Netflix"));
        assert_eq!(generated[1].amount, Money::from_units(2));
        assert_ne!(generated[0].id, generated[1].id);
        // Templates are untouched
        assert_eq!(templates[1].description, None);
    }

    #[test]
    fn test_add_and_total() {
        let storage = Storage::in_memory();
        let service = RecurringService::new(&storage);

        service
            .add(NewRecurring {
                amount: Money::from_units(300),
                category: Some("cristopher".into()),
                subcategory: Some("terapias".into()),
                description: Some("Terapia semanal".into()),
            })
            .unwrap();
        service
            .add(NewRecurring {
                amount: Money::from_cents(4599),
                category: Some("Entretenimiento".into()),
                subcategory: None,
                description: None,
            })
            .unwrap();

        let all = service.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].subcategory, "Terapias");
        assert_eq!(all[1].subcategory, "Cine");
        assert_eq!(service.monthly_total(), Money::from_cents(34599));
    }

    #[test]
    fn test_generate_prepends_batch() {
        let storage = Storage::in_memory();
        let existing = Expense::new(Money::from_units(5), june_15(), "Gustos", "Snacks", None);
        storage.expenses.add(existing.clone()).unwrap();
        storage
            .recurring
            .save(vec![template(100, None), template(50, Some("Gas"))])
            .unwrap();

        let service = RecurringService::new(&storage);
        let generated = service.generate(june_15()).unwrap();
        assert_eq!(generated.len(), 2);

        let stored = storage.expenses.load();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].amount, Money::from_units(100));
        assert_eq!(stored[1].amount, Money::from_units(50));
        assert_eq!(stored[2], existing);
        assert_eq!(&stored[..2], &generated[..]);
        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn test_generate_without_templates_is_noop() {
        let storage = Storage::in_memory();
        let service = RecurringService::new(&storage);

        assert!(service.generate(june_15()).unwrap().is_empty());
        assert!(storage.expenses.load().is_empty());
    }

    #[test]
    fn test_delete() {
        let storage = Storage::in_memory();
        let mut kept = template(1, None);
        kept.id = RecurringExpenseId::from("keep");
        let mut gone = template(2, None);
        gone.id = RecurringExpenseId::from("gone");
        storage.recurring.save(vec![kept.clone(), gone]).unwrap();

        let service = RecurringService::new(&storage);
        assert_eq!(service.delete("go").unwrap().id.as_str(), "gone");
        assert_eq!(service.list(), vec![kept]);
        assert!(service.delete("gone").unwrap_err().is_not_found());
    }
}
