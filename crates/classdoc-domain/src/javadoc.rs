//! Javadoc module - the parsed shape of a documentation comment

/// One element of a documentation description
///
/// Descriptions are an ordered run of plain text and inline tags. The set
/// of kinds is closed; parsers that meet anything else report it as
/// `Unrecognized` so consumers can treat it as a defect instead of
/// silently dropping text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionElement {
    /// Plain text, emitted verbatim
    Snippet(String),

    /// Inline tag such as `{@code x}` or `{@link Foo bar}`
    InlineTag {
        /// Tag name without the `@` (`code`, `link`, ...)
        name: String,
        /// Raw content after the tag name, untrimmed
        content: String,
    },

    /// Element kind the parser could not classify
    Unrecognized {
        /// Human-readable name of the offending kind
        kind: String,
    },
}

impl DescriptionElement {
    /// Convenience constructor for a snippet
    pub fn snippet(text: impl Into<String>) -> Self {
        DescriptionElement::Snippet(text.into())
    }

    /// Convenience constructor for an inline tag
    pub fn inline_tag(name: impl Into<String>, content: impl Into<String>) -> Self {
        DescriptionElement::InlineTag {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Block tag following the description (`@param`, `@return`, `@since`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTag {
    /// Tag name without the `@`
    pub name: String,

    /// Everything after the tag name, across continuation lines
    pub content: String,
}

/// A parsed documentation comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Javadoc {
    /// Free-text summary, in source order
    pub description: Vec<DescriptionElement>,

    /// Structured tags, excluded from extraction
    pub block_tags: Vec<BlockTag>,
}

impl Javadoc {
    /// Create a Javadoc from its parts
    pub fn new(description: Vec<DescriptionElement>, block_tags: Vec<BlockTag>) -> Self {
        Self {
            description,
            block_tags,
        }
    }

    /// True when the description has no text at all
    pub fn has_empty_description(&self) -> bool {
        self.description.iter().all(|element| match element {
            DescriptionElement::Snippet(text) => text.trim().is_empty(),
            DescriptionElement::InlineTag { .. } | DescriptionElement::Unrecognized { .. } => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description() {
        let doc = Javadoc::new(
            vec![DescriptionElement::snippet("  \n ")],
            vec![BlockTag {
                name: "since".to_string(),
                content: "1.0".to_string(),
            }],
        );
        assert!(doc.has_empty_description());
        assert!(Javadoc::default().has_empty_description());
    }

    #[test]
    fn test_inline_tag_counts_as_content() {
        let doc = Javadoc::new(vec![DescriptionElement::inline_tag("code", " x ")], Vec::new());
        assert!(!doc.has_empty_description());
    }
}
