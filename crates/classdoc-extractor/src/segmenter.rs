//! Sentence segmentation

use classdoc_domain::SentenceSegmenter;
use unicode_segmentation::UnicodeSegmentation;

/// Sentence segmenter based on the Unicode sentence boundary rules (UAX #29)
///
/// Pieces are trimmed, and pieces shorter than `min_chars` characters are
/// dropped, which also removes stray punctuation left between sentences.
#[derive(Debug, Clone)]
pub struct UnicodeSegmenter {
    min_chars: usize,
}

impl UnicodeSegmenter {
    /// Create a segmenter that keeps sentences of at least `min_chars` characters
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

impl Default for UnicodeSegmenter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SentenceSegmenter for UnicodeSegmenter {
    fn sentences(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.chars().count() >= self.min_chars)
            .map(str::to_string)
            .collect()
    }
}
