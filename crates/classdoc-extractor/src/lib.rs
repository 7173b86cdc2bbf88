//! Classdoc Extractor
//!
//! Turns one documentation artifact into `(key, sentence)` records.
//!
//! # Overview
//!
//! Two document formats are understood:
//!
//! - **Java sources**: the top-level type named after the file is located,
//!   its `/** ... */` comment is parsed, and the description part (block
//!   tags excluded) is flattened to text.
//! - **Rendered Javadoc pages**: the class description blocks are selected
//!   with a CSS selector.
//!
//! Either way the text is normalized (code blocks replaced by a placeholder,
//! tags stripped, paragraph breaks turned into sentence ends) and split into
//! sentences.
//!
//! # Architecture
//!
//! ```text
//! Document → java/javadoc or markup → TextNormalizer → SentenceSegmenter → records
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use classdoc_domain::{Document, KeyStrategy};
//! use classdoc_extractor::{Extractor, ExtractorConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::with_config(ExtractorConfig::default())?;
//! let document = Document::from_path("src/Widget.java", &KeyStrategy::BaseName)
//!     .ok_or("unsupported file")?;
//!
//! for record in extractor.extract(&document)? {
//!     println!("{}: {}", record.key, record.sentence);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod extractor;
mod markup;
mod normalizer;
mod sanitize;
mod segmenter;

pub mod java;
pub mod javadoc;


pub use error::ExtractorError;
pub use config::{ExtractorConfig, DEFAULT_DESCRIPTION_SELECTOR, DEFAULT_PLACEHOLDER};
pub use extractor::{DocumentExtractor, Extractor};
pub use markup::description_blocks;
pub use normalizer::TextNormalizer;
pub use sanitize::{is_emittable, sanitize};
pub use segmenter::UnicodeSegmenter;
