//! Gastos - family expense tracker
//!
//! This library provides the core functionality for the `gastos` command-line
//! tool: recording expenses against user-defined categories, fixed monthly
//! expenses, monthly summaries, AI-written spending reports and JSON backups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, recurring templates)
//! - `storage`: Key-value store and the repositories built on it
//! - `services`: Business logic layer
//! - `reports`: Monthly aggregation
//! - `insights`: Report generation through the Gemini API
//! - `backup`: Export snapshots, safety backups and restore
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos_cli::config::{paths::GastosPaths, settings::Settings};
//! use gastos_cli::storage::Storage;
//!
//! let paths = GastosPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{GastosError, GastosResult};
