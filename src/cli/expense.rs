//! Expense CLI commands
//!
//! Recording, listing and deleting individual expenses.

use clap::Subcommand;

use super::{confirm, parse_amount, parse_date, parse_month};
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::GastosResult;
use crate::services::{ExpenseService, NewExpense};
use crate::storage::Storage;

/// Expense commands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "45.50")
        amount: String,
        /// Category name (defaults to the first category)
        #[arg(short, long)]
        category: Option<String>,
        /// Subcategory name (defaults to the category's first one)
        #[arg(short, long)]
        subcategory: Option<String>,
        /// Date in YYYY-MM-DD format (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List expenses of a month, newest first
    List {
        /// Month in YYYY-MM format (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// List every stored expense
        #[arg(long, conflicts_with = "month")]
        all: bool,
        /// Show at most this many expenses
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show expense details
    Show {
        /// Expense ID or ID prefix
        id: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID or ID prefix
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
    assume_yes: bool,
) -> GastosResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            subcategory,
            date,
            description,
        } => {
            let expense = service.record(NewExpense {
                amount: parse_amount(&amount)?,
                date: parse_date(date.as_deref())?,
                category,
                subcategory,
                description,
            })?;

            println!("Recorded expense: {}", expense.amount.format_with_symbol(symbol));
            if expense.subcategory.is_empty() {
                println!("  Category: {}", expense.category);
            } else {
                println!("  Category: {} / {}", expense.category, expense.subcategory);
            }
            println!("  Date: {}", expense.date.format("%Y-%m-%d"));
            println!("  ID: {}", expense.id.short());
        }

        ExpenseCommands::List { month, all, limit } => {
            let mut expenses = if all {
                service.list()
            } else {
                service.list_month(parse_month(month.as_deref())?)
            };
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            println!("{}", format_expense_list(&expenses, symbol));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.find(&id)?;
            print!("{}", format_expense_details(&expense, symbol));

            if !confirm("Delete this expense?", assume_yes)? {
                println!("Delete cancelled.");
                return Ok(());
            }

            service.delete(expense.id.as_str())?;
            println!("Deleted expense {}", expense.id.short());
        }
    }

    Ok(())
}
