//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The document could not be read
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document body is not valid UTF-8
    #[error("Invalid UTF-8 in {}", .path.display())]
    Encoding {
        /// Document path
        path: PathBuf,
    },

    /// The document could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A description element of unknown kind reached plain-text conversion
    #[error("Unknown description element type: {0}")]
    ContractViolation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// True for errors that signal a defect in the extraction logic itself
    /// rather than a problem with one document
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, ExtractorError::ContractViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_classification() {
        assert!(ExtractorError::ContractViolation("Figure".into()).is_contract_violation());
        assert!(!ExtractorError::Parse("unbalanced braces".into()).is_contract_violation());
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ExtractorError::Encoding {
            path: PathBuf::from("/corpus/Bad.java"),
        };
        assert_eq!(err.to_string(), "Invalid UTF-8 in /corpus/Bad.java");
    }
}
