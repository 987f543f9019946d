//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod category;
pub mod confirm;
pub mod expense;
pub mod export;
pub mod import;
pub mod recurring;
pub mod summary;

pub use backup::{handle_backup_command, BackupCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use confirm::confirm;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import;
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use summary::{handle_report, handle_summary};

use chrono::{Local, NaiveDate};

use crate::error::{GastosError, GastosResult};
use crate::models::{Money, YearMonth};

/// Parse a `YYYY-MM` month, defaulting to the current one
pub fn parse_month(month: Option<&str>) -> GastosResult<YearMonth> {
    match month {
        Some(s) => s
            .parse::<YearMonth>()
            .map_err(|e| GastosError::Validation(e.to_string())),
        None => Ok(YearMonth::current()),
    }
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub fn parse_date(date: Option<&str>) -> GastosResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            GastosError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse a user-entered amount
pub fn parse_amount(amount: &str) -> GastosResult<Money> {
    let money = Money::parse(amount).map_err(|e| GastosError::Validation(e.to_string()))?;
    if money.is_negative() {
        return Err(GastosError::Validation(format!(
            "Amount cannot be negative: {}",
            amount.trim()
        )));
    }
    Ok(money)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month(Some("2024-06")).unwrap(), YearMonth::new(2024, 6).unwrap());
        assert!(parse_month(Some("June")).unwrap_err().is_validation());
        assert_eq!(parse_month(None).unwrap(), YearMonth::current());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-06-15")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert!(parse_date(Some("15/06/2024")).is_err());
        assert!(parse_date(Some("2024-02-30")).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("45.50").unwrap(), Money::from_cents(4550));
        assert_eq!(parse_amount("$1,200").unwrap(), Money::from_units(1200));
        assert!(parse_amount("-3").unwrap_err().is_validation());
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }
}
