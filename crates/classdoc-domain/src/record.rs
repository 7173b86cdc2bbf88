//! Extraction records - the rows of the output table

/// A `(key, sentence)` pair produced by extraction
///
/// Records have no identity beyond their two fields; duplicates are
/// permitted and never merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtractionRecord {
    /// Document key the sentence belongs to
    pub key: String,

    /// One sentence of description text
    pub sentence: String,
}

impl ExtractionRecord {
    /// Create a new record
    pub fn new(key: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            sentence: sentence.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_equal() {
        let a = ExtractionRecord::new("Foo", "Hello there.");
        let b = ExtractionRecord::new("Foo", "Hello there.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_records_sort_by_key_then_sentence() {
        let mut records = vec![
            ExtractionRecord::new("B", "one"),
            ExtractionRecord::new("A", "two"),
            ExtractionRecord::new("A", "one"),
        ];
        records.sort();
        assert_eq!(records[0], ExtractionRecord::new("A", "one"));
        assert_eq!(records[2], ExtractionRecord::new("B", "one"));
    }
}
