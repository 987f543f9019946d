//! Monthly summary and AI report commands

use super::parse_month;
use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::GastosResult;
use crate::insights::{api_key_from_env, generate_or_fallback, ReportRequest};
use crate::reports::MonthlySummary;
use crate::storage::Storage;

/// Print the category breakdown for a month
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
    show_expenses: bool,
) -> GastosResult<()> {
    let summary = MonthlySummary::generate(storage, parse_month(month)?);
    let symbol = settings.currency_symbol.as_str();

    print!("{}", summary.format_terminal(symbol));
    if show_expenses && !summary.is_empty() {
        println!();
        println!("{}", format_expense_list(&summary.expenses, symbol));
    }
    Ok(())
}

/// Ask the report service to analyse a month's spending
///
/// Service failures print the fallback message instead of failing.
pub async fn handle_report(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
) -> GastosResult<()> {
    let summary = MonthlySummary::generate(storage, parse_month(month)?);
    let symbol = settings.currency_symbol.as_str();

    print!("{}", summary.format_terminal(symbol));
    if summary.is_empty() {
        return Ok(());
    }

    let request = ReportRequest {
        period_label: summary.month.label_es(),
        total: summary.total,
        expenses: summary.expenses,
    };

    println!();
    println!("Generating report with {}...", settings.report.model);
    let api_key = api_key_from_env();
    let text = generate_or_fallback(&settings.report, api_key.as_deref(), &request, symbol).await;

    println!();
    println!("{}", text.trim_end());
    Ok(())
}
