//! Error types for the CLI application.

use classdoc_extractor::ExtractorError;
use classdoc_pipeline::PipelineError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Extractor setup error
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Pipeline error
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The run was stopped before every document was processed
    #[error("Interrupted after {completed} of {total} documents")]
    Interrupted {
        /// Documents processed
        completed: usize,
        /// Documents discovered
        total: usize,
    },
}
