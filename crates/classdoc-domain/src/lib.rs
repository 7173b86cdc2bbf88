//! Classdoc Domain Layer
//!
//! This crate contains the core domain model for classdoc, the class-level
//! documentation sentence extractor. It has ZERO external dependencies and
//! defines the value objects and trait interfaces that the extractor, the
//! pipeline and the CLI depend upon.
//!
//! ## Key Concepts
//!
//! - **Document**: A discovered file with a format (structured source or
//!   rendered markup) and the key its sentences are grouped under
//! - **Key Strategy**: How a document's path is turned into its key
//! - **Extraction Record**: A `(key, sentence)` pair bound for the output
//! - **Javadoc**: The parsed shape of a documentation comment
//! - **Sentence Segmenter**: The boundary between plain text and sentences
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external capabilities

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod javadoc;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use document::{Document, DocumentFormat, KeyStrategy};
pub use javadoc::{BlockTag, DescriptionElement, Javadoc};
pub use record::ExtractionRecord;
pub use traits::SentenceSegmenter;
