//! Description extraction from rendered Javadoc pages

use crate::error::ExtractorError;
use crate::normalizer::TextNormalizer;
use scraper::{Html, Selector};

/// Normalized text of every description block matching `selector`, in
/// document order. Blocks that normalize to nothing are left out.
pub fn description_blocks(
    html: &str,
    selector: &str,
    normalizer: &TextNormalizer,
) -> Result<Vec<String>, ExtractorError> {
    let selector = Selector::parse(selector)
        .map_err(|e| ExtractorError::Config(format!("invalid selector '{}': {}", selector, e)))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|block| normalizer.element_text(block))
        .filter(|text| !text.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DESCRIPTION_SELECTOR;

    const CLASSIC_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="header"><h2>Class Widget</h2></div>
<div class="description">
  <ul class="blockList"><li class="blockList">
    <div class="block">Builds widgets.<p>Example:<pre>Widget w = new Widget();</pre>
    Then call <code>build</code>.</div>
  </li></ul>
</div>
<div class="details"><div class="block">Method docs are not descriptions.</div></div>
</body></html>"#;

    #[test]
    fn test_classic_layout() {
        let blocks = description_blocks(
            CLASSIC_PAGE,
            DEFAULT_DESCRIPTION_SELECTOR,
            &TextNormalizer::default(),
        )
        .unwrap();
        assert_eq!(
            blocks,
            vec!["Builds widgets. Example: code-example Then call build."]
        );
    }

    #[test]
    fn test_html5_layout() {
        let page = r#"<html><body><main>
<section class="class-description" id="class-description">
<div class="block">First block.</div>
<div class="block">Second block.</div>
</section></main></body></html>"#;
        let blocks =
            description_blocks(page, DEFAULT_DESCRIPTION_SELECTOR, &TextNormalizer::default())
                .unwrap();
        assert_eq!(blocks, vec!["First block.", "Second block."]);
    }

    #[test]
    fn test_no_matching_blocks() {
        let blocks = description_blocks(
            "<html><body><p>Nothing here.</p></body></html>",
            DEFAULT_DESCRIPTION_SELECTOR,
            &TextNormalizer::default(),
        )
        .unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_invalid_selector_is_config_error() {
        let err = description_blocks("<p></p>", "div[", &TextNormalizer::default()).unwrap_err();
        assert!(matches!(err, ExtractorError::Config(_)));
    }
}
