//! Corpus discovery

use classdoc_domain::{Document, KeyStrategy};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// The documents of one run, discovered up front
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    skipped: usize,
}

impl Corpus {
    /// Walk every root and collect the documents with a recognized format.
    ///
    /// A root may be a directory or a single file. A file reached through
    /// several roots is listed once. Entries that cannot be read are logged
    /// and counted as skipped; discovery itself never fails.
    pub fn discover<P: AsRef<Path>>(roots: &[P], strategy: &KeyStrategy, follow_links: bool) -> Self {
        let mut corpus = Corpus::default();
        let mut seen = HashSet::new();

        for root in roots {
            let root = root.as_ref();
            for entry in WalkDir::new(root).follow_links(follow_links) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                        corpus.skipped += 1;
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }

                let path = absolute(entry.path());
                if !seen.insert(path.clone()) {
                    debug!("Already discovered {}", path.display());
                    continue;
                }
                if let Some(document) = Document::from_path(path, strategy) {
                    corpus.documents.push(document);
                }
            }
        }

        debug!(
            "Discovered {} documents ({} entries skipped)",
            corpus.documents.len(),
            corpus.skipped
        );
        corpus
    }

    /// Build a corpus from documents that are already known
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            skipped: 0,
        }
    }

    /// Documents in traversal order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if no documents were found
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of entries skipped because they could not be read
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl IntoIterator for Corpus {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classdoc_domain::DocumentFormat;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_discovers_recognized_files_recursively() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a/Foo.java"));
        touch(&dir.path().join("a/b/Bar.html"));
        touch(&dir.path().join("a/b/Baz.HTM"));
        touch(&dir.path().join("README.md"));
        touch(&dir.path().join("a/Makefile"));

        let corpus = Corpus::discover(&[dir.path()], &KeyStrategy::BaseName, false);

        let mut keys: Vec<_> = corpus.documents().iter().map(|d| d.key.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["Bar", "Baz", "Foo"]);
        assert_eq!(corpus.skipped(), 0);
        assert!(corpus.documents().iter().all(|d| d.path.is_absolute()));
    }

    #[test]
    fn test_overlapping_roots_list_each_file_once() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        touch(&sub.join("Foo.java"));
        touch(&dir.path().join("Bar.java"));

        let corpus = Corpus::discover(
            &[dir.path(), sub.as_path(), dir.path()],
            &KeyStrategy::BaseName,
            false,
        );

        let mut keys: Vec<_> = corpus.documents().iter().map(|d| d.key.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["Bar", "Foo"]);
    }

    #[test]
    fn test_root_may_be_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Foo.java");
        touch(&file);

        let corpus = Corpus::discover(&[&file], &KeyStrategy::BaseName, false);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.documents()[0].format, DocumentFormat::Structured);
    }

    #[test]
    fn test_missing_root_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Foo.java"));
        let missing = dir.path().join("missing");

        let corpus = Corpus::discover(&[missing.as_path(), dir.path()], &KeyStrategy::BaseName, false);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.skipped(), 1);
    }

    #[test]
    fn test_relative_keys() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("java/util/List.java"));
        let root = dir.path().canonicalize().unwrap();

        let corpus = Corpus::discover(&[&root], &KeyStrategy::RelativeTo(root.clone()), false);
        assert_eq!(corpus.documents()[0].key, "java.util.List");
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let corpus = Corpus::discover(&[dir.path()], &KeyStrategy::BaseName, false);
        assert!(corpus.is_empty());
    }
}
