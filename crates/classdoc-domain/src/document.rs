//! Document module - discovered corpus entries and their keys

use std::path::{Path, PathBuf};

/// Format of a document, derived from its file extension
///
/// - Structured: source code whose documentation is parsed from comments
/// - Markup: a pre-rendered documentation page queried through its DOM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Java source (`.java`)
    Structured,

    /// Rendered Javadoc page (`.html`, `.htm`)
    Markup,
}

impl DocumentFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Structured => "structured",
            DocumentFormat::Markup => "markup",
        }
    }

    /// Map a file extension (without the dot) to a format, ignoring case
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "java" => Some(DocumentFormat::Structured),
            "html" | "htm" => Some(DocumentFormat::Markup),
            _ => None,
        }
    }

    /// Detect the format of a path from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the key of a document is derived from its path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyStrategy {
    /// File name with the extension stripped (`a/b/Foo.java` → `Foo`)
    #[default]
    BaseName,

    /// Path relative to a root, dot-separated, extension stripped
    /// (`<root>/java/util/List.java` → `java.util.List`).
    ///
    /// Documents outside the root fall back to [`KeyStrategy::BaseName`].
    RelativeTo(PathBuf),
}

impl KeyStrategy {
    /// Derive the key for a path
    pub fn key_for(&self, path: &Path) -> String {
        match self {
            KeyStrategy::BaseName => base_name(path),
            KeyStrategy::RelativeTo(root) => match path.strip_prefix(root) {
                Ok(relative) if relative.file_name().is_some() => dotted(relative),
                _ => base_name(path),
            },
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn dotted(relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .filter(|segment| !segment.is_empty())
        .collect();
    segments.push(base_name(relative));
    segments.join(".")
}

/// A document discovered in the corpus
///
/// Immutable once discovered: the path, format and key never change
/// for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Format derived from the file extension
    pub format: DocumentFormat,

    /// Key under which this document's sentences are emitted
    pub key: String,
}

impl Document {
    /// Create a document with an explicit key
    pub fn new(path: impl Into<PathBuf>, format: DocumentFormat, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format,
            key: key.into(),
        }
    }

    /// Build a document from a path if its extension is recognized
    pub fn from_path(path: impl Into<PathBuf>, strategy: &KeyStrategy) -> Option<Self> {
        let path = path.into();
        let format = DocumentFormat::from_path(&path)?;
        let key = strategy.key_for(&path);
        Some(Self { path, format, key })
    }

    /// File stem of the document, used to find a source file's primary type
    pub fn stem(&self) -> String {
        base_name(&self.path)
    }

    /// Key for the n-th (1-based) description fragment of this document
    pub fn fragment_key(&self, index: usize) -> String {
        format!("{}#{}", self.key, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("java"), Some(DocumentFormat::Structured));
        assert_eq!(DocumentFormat::from_extension("JAVA"), Some(DocumentFormat::Structured));
        assert_eq!(DocumentFormat::from_extension("html"), Some(DocumentFormat::Markup));
        assert_eq!(DocumentFormat::from_extension("htm"), Some(DocumentFormat::Markup));
        assert_eq!(DocumentFormat::from_extension("kt"), None);
        assert_eq!(DocumentFormat::from_extension(""), None);
    }

    #[test]
    fn test_format_from_path_without_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("/src/Makefile")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("/src/.java")), None);
    }

    #[test]
    fn test_base_name_key() {
        let key = KeyStrategy::BaseName.key_for(Path::new("/repo/src/com/acme/Foo.java"));
        assert_eq!(key, "Foo");
    }

    #[test]
    fn test_relative_key() {
        let strategy = KeyStrategy::RelativeTo(PathBuf::from("/repo/src"));
        let key = strategy.key_for(Path::new("/repo/src/java/util/List.java"));
        assert_eq!(key, "java.util.List");
    }

    #[test]
    fn test_relative_key_outside_root_falls_back() {
        let strategy = KeyStrategy::RelativeTo(PathBuf::from("/repo/src"));
        let key = strategy.key_for(Path::new("/elsewhere/Bar.java"));
        assert_eq!(key, "Bar");
    }

    #[test]
    fn test_relative_key_at_root_level() {
        let strategy = KeyStrategy::RelativeTo(PathBuf::from("/repo/src"));
        assert_eq!(strategy.key_for(Path::new("/repo/src/Top.java")), "Top");
    }

    #[test]
    fn test_document_from_path() {
        let doc = Document::from_path("/docs/api/Widget.html", &KeyStrategy::BaseName).unwrap();
        assert_eq!(doc.format, DocumentFormat::Markup);
        assert_eq!(doc.key, "Widget");
        assert_eq!(doc.stem(), "Widget");

        assert!(Document::from_path("/docs/readme.md", &KeyStrategy::BaseName).is_none());
    }

    #[test]
    fn test_fragment_key() {
        let doc = Document::new("/docs/Widget.html", DocumentFormat::Markup, "Widget");
        assert_eq!(doc.fragment_key(2), "Widget#2");
    }
}
