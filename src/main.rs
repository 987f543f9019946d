use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gastos_cli::cli::{
    handle_backup_command, handle_category_command, handle_expense_command,
    handle_export_command, handle_import, handle_recurring_command, handle_report, handle_summary,
    BackupCommands, CategoryCommands, ExpenseCommands, ExportCommands, RecurringCommands,
};
use gastos_cli::config::{paths::GastosPaths, settings::Settings};
use gastos_cli::models::default_categories;
use gastos_cli::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Family expense tracker",
    long_about = "Gastos records family expenses against your own categories, \
                  tracks fixed monthly expenses, summarizes each month and \
                  keeps everything in plain JSON files you can back up."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long = "yes", global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and default categories
    Init,

    /// Show or change configuration
    Config {
        /// Currency symbol for amounts
        #[arg(long)]
        currency: Option<String>,
        /// Model used for monthly reports
        #[arg(long)]
        model: Option<String>,
        /// Number of safety backups to keep
        #[arg(long)]
        keep_backups: Option<u32>,
    },

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show the category breakdown for a month
    Summary {
        /// Month in YYYY-MM format (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// Also list the month's expenses
        #[arg(short, long)]
        expenses: bool,
    },

    /// Generate an AI-written spending report for a month
    Report {
        /// Month in YYYY-MM format (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Fixed monthly expenses
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace stored data with a JSON backup
    Import {
        /// Path to the backup file
        file: PathBuf,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = GastosPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Commands::Init => {
            println!("Initializing Gastos at: {}", paths.base_dir().display());
            let outcome = initialize_storage(&paths)?;
            if outcome.seeded_categories {
                println!();
                println!("Default categories have been created:");
                for category in default_categories() {
                    println!("  - {} ({})", category.name, category.subcategories.join(", "));
                }
            } else {
                println!("Existing data kept.");
            }
            println!();
            println!("Run 'gastos add <amount>' to record your first expense.");
        }
        Commands::Config {
            currency,
            model,
            keep_backups,
        } => {
            let changed = currency.is_some() || model.is_some() || keep_backups.is_some();
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(model) = model {
                settings.report.model = model;
            }
            if let Some(keep) = keep_backups {
                if keep == 0 {
                    bail!("--keep-backups must be at least 1");
                }
                settings.backup_retention.keep_count = keep;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("Gastos Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Report model:    {}", settings.report.model);
            println!("  Backups kept:    {}", settings.backup_retention.keep_count);
        }
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd, cli.yes)?,
        Commands::Summary { month, expenses } => {
            handle_summary(&storage, &settings, month.as_deref(), expenses)?
        }
        Commands::Report { month } => handle_report(&storage, &settings, month.as_deref()).await?,
        Commands::Category(cmd) => handle_category_command(&storage, cmd, cli.yes)?,
        Commands::Recurring(cmd) => handle_recurring_command(&storage, &settings, cmd, cli.yes)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Import { file } => handle_import(&storage, &paths, &settings, &file, cli.yes)?,
        Commands::Backup(cmd) => {
            handle_backup_command(&storage, &paths, &settings, cmd, cli.yes)?
        }
    }

    Ok(())
}
