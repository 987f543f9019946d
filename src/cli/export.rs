//! CLI commands for data export
//!
//! JSON writes a full backup document that `gastos import` reads back;
//! CSV writes expenses only.

use chrono::Local;
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::parse_month;
use crate::backup::{default_export_filename, write_export};
use crate::error::GastosResult;
use crate::export::export_expenses_csv;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data as a JSON backup
    Json {
        /// Output file path (defaults to GastosApp_Backup_<date>.json)
        output: Option<PathBuf>,
    },

    /// Export expenses to CSV
    Csv {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only export this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> GastosResult<()> {
    match cmd {
        ExportCommands::Json { output } => {
            let output = output
                .unwrap_or_else(|| PathBuf::from(default_export_filename(Local::now().date_naive())));
            let (path, data) = write_export(storage, &output)?;

            println!("Exported backup to: {}", path.display());
            println!("  Expenses:           {}", data.expenses.len());
            println!("  Categories:         {}", data.categories.len());
            println!("  Recurring expenses: {}", data.recurring_expenses.len());
        }

        ExportCommands::Csv { output, month } => {
            let month = month.as_deref().map(|m| parse_month(Some(m))).transpose()?;

            match output {
                Some(path) => {
                    let file = File::create(&path)?;
                    let mut writer = BufWriter::new(file);
                    let count = export_expenses_csv(storage, &mut writer, month)?;
                    writer.flush()?;
                    println!("Exported {} expense(s) to: {}", count, path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    export_expenses_csv(storage, &mut writer, month)?;
                    writer.flush()?;
                }
            }
        }
    }

    Ok(())
}
