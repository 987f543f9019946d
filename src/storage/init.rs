//! Storage initialization
//!
//! Handles first-run setup: directories, settings file and the built-in
//! category set.

use tracing::info;

use crate::config::paths::GastosPaths;
use crate::config::settings::Settings;
use crate::error::GastosError;

use super::Storage;

/// What `initialize_storage` created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    pub created_settings: bool,
    pub seeded_categories: bool,
}

/// Initialize storage for a fresh installation
///
/// Safe to run repeatedly; existing settings and categories are kept.
pub fn initialize_storage(paths: &GastosPaths) -> Result<InitOutcome, GastosError> {
    paths.ensure_directories()?;

    let created_settings = !paths.is_initialized();
    if created_settings {
        Settings::default().save(paths)?;
    }

    let storage = Storage::new(paths.clone())?;
    let categories_file = paths
        .data_dir()
        .join(format!("{}.json", super::CATEGORIES_KEY));
    let seeded_categories = !categories_file.exists();
    if seeded_categories {
        storage.categories.save(storage.categories.load())?;
    }

    info!(
        base_dir = %paths.base_dir().display(),
        created_settings,
        seeded_categories,
        "initialized storage"
    );

    Ok(InitOutcome {
        created_settings,
        seeded_categories,
    })
}
