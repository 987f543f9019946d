//! Recurring expense CLI commands

use clap::Subcommand;

use super::{confirm, parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_recurring_list};
use crate::error::GastosResult;
use crate::services::{NewRecurring, RecurringService};
use crate::storage::Storage;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// List recurring templates and their monthly total
    List,

    /// Add a recurring template
    Add {
        /// Amount (e.g., "300")
        amount: String,
        /// Category name (defaults to the first category)
        #[arg(short, long)]
        category: Option<String>,
        /// Subcategory name (defaults to the category's first one)
        #[arg(short, long)]
        subcategory: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete a recurring template
    Delete {
        /// Template ID or ID prefix
        id: String,
    },

    /// Record one expense per template
    Generate {
        /// Date for the generated expenses in YYYY-MM-DD format (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a recurring command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
    assume_yes: bool,
) -> GastosResult<()> {
    let service = RecurringService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecurringCommands::List => {
            println!("{}", format_recurring_list(&service.list(), symbol));
        }

        RecurringCommands::Add {
            amount,
            category,
            subcategory,
            description,
        } => {
            let template = service.add(NewRecurring {
                amount: parse_amount(&amount)?,
                category,
                subcategory,
                description,
            })?;

            println!(
                "Added recurring expense: {}",
                template.amount.format_with_symbol(symbol)
            );
            println!("  Category: {}", template.category);
            println!("  ID: {}", template.id.short());
            println!(
                "  Monthly total: {}",
                service.monthly_total().format_with_symbol(symbol)
            );
        }

        RecurringCommands::Delete { id } => {
            let template = service.find(&id)?;
            let question = format!(
                "Delete recurring expense {} ({})?",
                template.id.short(),
                template.amount.format_with_symbol(symbol)
            );

            if !confirm(&question, assume_yes)? {
                println!("Delete cancelled.");
                return Ok(());
            }

            service.delete(template.id.as_str())?;
            println!("Deleted recurring expense {}", template.id.short());
        }

        RecurringCommands::Generate { date } => {
            let templates = service.list();
            if templates.is_empty() {
                println!("No recurring expenses defined.");
                return Ok(());
            }

            let on_date = parse_date(date.as_deref())?;
            let question = format!(
                "Record {} expense(s) totalling {} on {}?",
                templates.len(),
                service.monthly_total().format_with_symbol(symbol),
                on_date.format("%Y-%m-%d")
            );

            if !confirm(&question, assume_yes)? {
                println!("Generate cancelled.");
                return Ok(());
            }

            let generated = service.generate(on_date)?;
            println!("Recorded {} expense(s):", generated.len());
            println!("{}", format_expense_list(&generated, symbol));
        }
    }

    Ok(())
}
