//! Error types for pipeline operations

use classdoc_extractor::ExtractorError;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the record sink
#[derive(Error, Debug)]
pub enum SinkError {
    /// The output could not be created or flushed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The sink was already closed
    #[error("Sink is closed")]
    Closed,

    /// A writer panicked while holding the sink lock
    #[error("Sink lock poisoned")]
    Poisoned,
}

/// Errors that end a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the output failed
    #[error("Output error: {0}")]
    Sink(#[from] SinkError),

    /// The extraction logic met input it was never written for
    #[error("Contract violation: {0}")]
    ContractViolation(ExtractorError),

    /// In-flight work did not finish within the drain timeout
    #[error("Timed out after {0:?} waiting for {1} in-flight documents")]
    DrainTimeout(Duration, usize),

    /// Worker error (tokio runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}
