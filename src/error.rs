use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a menu import run
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input document is missing or unreadable
    #[error("Failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be created
    #[error("Failed to create output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize records as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A configured CSS selector is invalid
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
