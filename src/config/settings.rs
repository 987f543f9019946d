//! User settings for Gastos
//!
//! Manages user preferences including the currency symbol, backup retention
//! and the report service configuration.

use serde::{Deserialize, Serialize};

use super::paths::GastosPaths;
use crate::error::GastosError;

/// Default model used for monthly reports
pub const DEFAULT_REPORT_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the generative language API
pub const DEFAULT_REPORT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Backup retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRetention {
    /// Number of automatic safety backups to keep
    pub keep_count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self { keep_count: 20 }
    }
}

/// Report service settings
///
/// The API key is never stored here; it is read from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Model name
    #[serde(default = "default_report_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_report_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_report_timeout")]
    pub timeout_secs: u64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            model: default_report_model(),
            endpoint: default_report_endpoint(),
            timeout_secs: default_report_timeout(),
        }
    }
}

/// User settings for Gastos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Safety backup retention policy
    #[serde(default)]
    pub backup_retention: BackupRetention,

    /// Monthly report service
    #[serde(default)]
    pub report: ReportSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_report_model() -> String {
    DEFAULT_REPORT_MODEL.to_string()
}

fn default_report_endpoint() -> String {
    DEFAULT_REPORT_ENDPOINT.to_string()
}

fn default_report_timeout() -> u64 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            backup_retention: BackupRetention::default(),
            report: ReportSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GastosPaths) -> Result<Self, GastosError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GastosError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GastosError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GastosPaths) -> Result<(), GastosError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GastosError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| GastosError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
