//! Command implementations for the dfq CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod filter;
pub mod operators;
pub mod parse;

use std::path::PathBuf;

use datefilter_rs::RecordStore;
use tracing::{debug, warn};

use crate::cli::Cli;
use config::{Config, DateFormat};

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter parsing or compilation error.
    #[error("filter error: {0}")]
    Filter(#[from] datefilter_rs::FilterError),

    /// Record store error.
    #[error("records error: {0}")]
    Store(#[from] datefilter_rs::RecordStoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// How record dates are rendered in tables.
    pub date_format: DateFormat,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// `--no-color` wins over `output.color`, which wins over the default.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
            date_format: config.output.date_format(),
        }
    }
}

/// Resolves the records file with priority: flag/env > config > XDG default.
pub fn resolve_store(cli: &Cli, config: &Config) -> Result<RecordStore> {
    let store = if let Some(path) = &cli.records {
        RecordStore::with_path(path.clone())
    } else if let Some(path) = &config.records.path {
        RecordStore::with_path(PathBuf::from(path))
    } else {
        RecordStore::new()?
    };

    debug!(path = %store.path().display(), "resolved records file");
    if !store.exists() {
        warn!(path = %store.path().display(), "records file does not exist");
    }
    Ok(store)
}
