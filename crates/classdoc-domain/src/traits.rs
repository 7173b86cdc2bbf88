//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for splitting normalized plain text into sentences
///
/// Implemented by the extractor layer (classdoc-extractor). Implementations
/// must return a finite, ordered sequence and may return untrimmed
/// sentences; callers handle trimming and filtering.
pub trait SentenceSegmenter: Send + Sync {
    /// Split text into sentences in reading order
    fn sentences(&self, text: &str) -> Vec<String>;
}

impl<T: SentenceSegmenter + ?Sized> SentenceSegmenter for Box<T> {
    fn sentences(&self, text: &str) -> Vec<String> {
        (**self).sentences(text)
    }
}

impl<T: SentenceSegmenter + ?Sized> SentenceSegmenter for std::sync::Arc<T> {
    fn sentences(&self, text: &str) -> Vec<String> {
        (**self).sentences(text)
    }
}
