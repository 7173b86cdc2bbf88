//! Strip residual markup from description text

use crate::config::ExtractorConfig;
use scraper::{ElementRef, Html};

/// Elements whose boundaries separate words
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "blockquote", "dd", "div", "dl", "dt", "h1", "h2", "h3", "h4", "h5", "h6",
    "hr", "li", "ol", "section", "table", "td", "th", "tr", "ul",
];

/// Elements whose text never belongs to the description
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Sentence-final punctuation that already closes a paragraph
const TERMINATORS: &[char] = &['.', '!', '?', ':', ';'];

/// Characters that would be read as markup again; never emitted
pub(crate) const MARKUP_CHARS: [char; 2] = ['<', '&'];

/// Turns HTML-bearing description text into segmentation-ready plain text
///
/// - `<pre>` blocks become a placeholder token
/// - `<p>` boundaries end the preceding sentence (when enabled)
/// - every other tag is stripped, entities are decoded
/// - decoded `<` and `&` become spaces, so the output is never markup
/// - whitespace runs collapse to a single space
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    placeholder: String,
    paragraph_breaks: bool,
}

impl TextNormalizer {
    /// Create a normalizer
    pub fn new(placeholder: impl Into<String>, paragraph_breaks: bool) -> Self {
        Self {
            placeholder: placeholder.into(),
            paragraph_breaks,
        }
    }

    /// Create a normalizer from extractor settings
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.placeholder.clone(), config.paragraph_breaks)
    }

    /// Placeholder substituted for code blocks
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Normalize a fragment of description text
    pub fn normalize(&self, text: &str) -> String {
        if !text.contains(MARKUP_CHARS) {
            return collapse_whitespace(text);
        }
        let fragment = Html::parse_fragment(text);
        self.element_text(fragment.root_element())
    }

    /// Normalized text content of a parsed element
    pub fn element_text(&self, element: ElementRef<'_>) -> String {
        let mut out = String::new();
        self.render(element, &mut out);
        collapse_whitespace(&out)
    }

    fn render(&self, element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                out.extend(
                    text.chars()
                        .map(|c| if MARKUP_CHARS.contains(&c) { ' ' } else { c }),
                );
                continue;
            }
            let Some(child) = ElementRef::wrap(child) else {
                continue;
            };

            let name = child.value().name();
            match name {
                "pre" => {
                    out.push(' ');
                    out.push_str(&self.placeholder);
                    out.push(' ');
                }
                "p" if self.paragraph_breaks => {
                    close_sentence(out);
                    self.render(child, out);
                    close_sentence(out);
                }
                "br" => out.push(' '),
                _ if SKIPPED_ELEMENTS.contains(&name) => {}
                _ if name == "p" || BLOCK_ELEMENTS.contains(&name) => {
                    out.push(' ');
                    self.render(child, out);
                    out.push(' ');
                }
                _ => self.render(child, out),
            }
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

/// End the text so far with a sentence terminator, unless it is empty
/// or already ends with one
fn close_sentence(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    if trimmed_len == 0 {
        return;
    }
    out.truncate(trimmed_len);
    if !out.ends_with(TERMINATORS) {
        out.push('.');
    }
    out.push(' ');
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: markup-free text is only whitespace-canonicalized
        #[test]
        fn test_markup_free_text_is_untouched(text in "[A-Za-z0-9 .,!?\n\t]{0,80}") {
            let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
            prop_assert_eq!(TextNormalizer::default().normalize(&text), expected);
        }

        /// Property: output never contains characters read as markup
        #[test]
        fn test_output_has_no_markup_characters(text in "\\PC{0,80}") {
            let once = TextNormalizer::default().normalize(&text);
            prop_assert!(!once.contains(MARKUP_CHARS));
        }

        /// Property: normalizing twice equals normalizing once
        #[test]
        fn test_idempotent(
            parts in proptest::collection::vec(
                prop_oneof![
                    "[A-Za-z ]{1,12}",
                    Just("<p>".to_string()),
                    Just("<br>".to_string()),
                    Just("<code>x</code>".to_string()),
                    Just("<pre>a = b;</pre>".to_string()),
                    Just(". ".to_string()),
                    Just("&lt;b&gt;".to_string()),
                    Just("&lt;/b&gt;".to_string()),
                    Just("&amp;".to_string()),
                    Just("&amp;lt;p&amp;gt;".to_string()),
                    Just(" a < b ".to_string()),
                ],
                0..12,
            )
        ) {
            let normalizer = TextNormalizer::default();
            let text: String = parts.concat();
            let once = normalizer.normalize(&text);
            prop_assert_eq!(normalizer.normalize(&once), once.clone());
        }
    }
}
