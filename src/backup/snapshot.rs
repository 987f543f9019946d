//! Backup file reading and writing
//!
//! A backup file is an `AppData` document. When reading one, only the
//! presence of `expenses` and `categories` is required; everything else is
//! optional.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::info;

use crate::error::{GastosError, GastosResult};
use crate::models::{AppData, ImportData};
use crate::storage::{write_json_atomic, Storage};

/// Keys a backup file must carry
const REQUIRED_KEYS: [&str; 2] = ["expenses", "categories"];

/// Default file name for an export made on `date`
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("GastosApp_Backup_{}.json", date.format("%Y-%m-%d"))
}

/// Parse and validate the contents of a backup file
pub fn parse_backup(contents: &str) -> GastosResult<ImportData> {
    let value: Value = serde_json::from_str(contents)
        .map_err(|e| GastosError::Import(format!("File is not valid JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| GastosError::Import("Backup must be a JSON object".into()))?;

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| object.get(*key).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(GastosError::Import(format!(
            "Invalid backup format: missing {}",
            missing.join(" and ")
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| GastosError::Import(format!("Invalid backup format: {}", e)))
}

/// Read and validate a backup file
pub fn read_backup_file(path: &Path) -> GastosResult<ImportData> {
    let contents = fs::read_to_string(path).map_err(|e| {
        GastosError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_backup(&contents)
}

/// Write the current store to `path` as a backup file
pub fn write_export(storage: &Storage, path: &Path) -> GastosResult<(PathBuf, AppData)> {
    let data = storage.export_all();
    write_json_atomic(path, &data)
        .map_err(|e| GastosError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(
        path = %path.display(),
        expenses = data.expenses.len(),
        categories = data.categories.len(),
        recurring = data.recurring_expenses.len(),
        "exported backup"
    );
    Ok((path.to_path_buf(), data))
}
