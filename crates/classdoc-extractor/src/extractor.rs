//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::normalizer::TextNormalizer;
use crate::segmenter::UnicodeSegmenter;
use crate::{java, javadoc, markup};
use classdoc_domain::{Document, DocumentFormat, ExtractionRecord, SentenceSegmenter};
use std::fs;
use tracing::debug;

/// The Extractor turns one document into (key, sentence) records
///
/// Extraction is synchronous and holds no per-document state, so a single
/// Extractor can be shared across worker threads.
pub struct Extractor<S>
where
    S: SentenceSegmenter,
{
    segmenter: S,
    normalizer: TextNormalizer,
    config: ExtractorConfig,
}

impl<S> Extractor<S>
where
    S: SentenceSegmenter,
{
    /// Create a new Extractor
    pub fn new(segmenter: S, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            segmenter,
            normalizer: TextNormalizer::from_config(&config),
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read a document from disk and extract its description sentences
    pub fn extract(&self, document: &Document) -> Result<Vec<ExtractionRecord>, ExtractorError> {
        let bytes = fs::read(&document.path).map_err(|source| ExtractorError::Io {
            path: document.path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ExtractorError::Encoding {
            path: document.path.clone(),
        })?;
        self.extract_source(document, &text)
    }

    /// Extract description sentences from already loaded document text
    pub fn extract_source(
        &self,
        document: &Document,
        text: &str,
    ) -> Result<Vec<ExtractionRecord>, ExtractorError> {
        let records = match document.format {
            DocumentFormat::Structured => self.extract_structured(document, text)?,
            DocumentFormat::Markup => self.extract_markup(document, text)?,
        };

        debug!(
            "Extracted {} sentences from {}",
            records.len(),
            document.path.display()
        );
        Ok(records)
    }

    fn extract_structured(
        &self,
        document: &Document,
        source: &str,
    ) -> Result<Vec<ExtractionRecord>, ExtractorError> {
        let Some(declaration) = java::primary_type(source, &document.stem())? else {
            debug!("No primary type in {}", document.path.display());
            return Ok(Vec::new());
        };
        let Some(comment) = declaration.javadoc else {
            debug!("{} has no documentation comment", declaration.name);
            return Ok(Vec::new());
        };

        let doc = javadoc::parse(&comment);
        let description = javadoc::description_text(&doc)?;
        let text = self.normalizer.normalize(&description);
        Ok(self.records(&document.key, &text))
    }

    fn extract_markup(
        &self,
        document: &Document,
        html: &str,
    ) -> Result<Vec<ExtractionRecord>, ExtractorError> {
        let blocks =
            markup::description_blocks(html, &self.config.description_selector, &self.normalizer)?;

        if self.config.fragment_keys && blocks.len() > 1 {
            return Ok(blocks
                .iter()
                .enumerate()
                .flat_map(|(i, block)| self.records(&document.fragment_key(i + 1), block))
                .collect());
        }
        Ok(self.records(&document.key, &blocks.join(" ")))
    }

    fn records(&self, key: &str, text: &str) -> Vec<ExtractionRecord> {
        self.segmenter
            .sentences(text)
            .into_iter()
            .map(|sentence| sentence.trim().to_string())
            .filter(|sentence| sentence.chars().count() >= self.config.min_sentence_chars)
            .map(|sentence| ExtractionRecord::new(key, sentence))
            .collect()
    }
}

/// Anything that can turn a document into records
///
/// Implemented by [`Extractor`]; the pipeline only depends on this trait.
pub trait DocumentExtractor: Send + Sync {
    /// Extract the records of one document
    fn extract(&self, document: &Document) -> Result<Vec<ExtractionRecord>, ExtractorError>;
}

impl<S> DocumentExtractor for Extractor<S>
where
    S: SentenceSegmenter,
{
    fn extract(&self, document: &Document) -> Result<Vec<ExtractionRecord>, ExtractorError> {
        Extractor::extract(self, document)
    }
}

impl Extractor<UnicodeSegmenter> {
    /// Create an Extractor using Unicode sentence boundaries
    pub fn with_config(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let segmenter = UnicodeSegmenter::new(config.min_sentence_chars);
        Self::new(segmenter, config)
    }
}
