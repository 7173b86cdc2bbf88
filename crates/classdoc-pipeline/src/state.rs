//! Run accounting

use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

/// Mutable counters of a run, shared by all workers behind a mutex
#[derive(Debug, Default)]
pub struct PipelineState {
    /// Documents discovered
    pub total: usize,

    /// Documents finished, successfully or not
    pub completed: usize,

    /// Documents that failed
    pub failed: usize,

    /// Rows written to the sink
    pub records_written: usize,

    /// Keys with at least one written row
    keys: HashSet<String>,

    /// Paths of failed documents
    failed_paths: Vec<PathBuf>,
}

impl PipelineState {
    /// Create state for a corpus of `total` documents
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Record a written row
    pub fn record_written(&mut self, key: &str) {
        self.records_written += 1;
        if !self.keys.contains(key) {
            self.keys.insert(key.to_string());
        }
    }

    /// Record a successfully processed document
    pub fn record_success(&mut self) {
        self.completed += 1;
    }

    /// Record a failed document
    pub fn record_failure(&mut self, path: PathBuf) {
        self.completed += 1;
        self.failed += 1;
        self.failed_paths.push(path);
    }

    /// Snapshot the counters
    pub fn summary(&self, skipped: usize, elapsed: Duration) -> RunSummary {
        let mut failed_paths = self.failed_paths.clone();
        failed_paths.sort();
        RunSummary {
            total: self.total,
            completed: self.completed,
            failed: self.failed,
            skipped,
            records_written: self.records_written,
            distinct_keys: self.keys.len(),
            failed_paths,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}

/// Final counters of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Documents discovered
    pub total: usize,
    /// Documents finished, successfully or not
    pub completed: usize,
    /// Documents that failed
    pub failed: usize,
    /// Corpus entries skipped during discovery
    pub skipped: usize,
    /// Rows written to the output
    pub records_written: usize,
    /// Keys with at least one row
    pub distinct_keys: usize,
    /// Paths of failed documents, sorted
    pub failed_paths: Vec<PathBuf>,
    /// Wall-clock duration of the run
    pub elapsed_ms: u64,
}

impl RunSummary {
    /// Documents processed without error
    pub fn succeeded(&self) -> usize {
        self.completed - self.failed
    }

    /// True if every discovered document was processed
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Extraction Summary".to_string(),
            "==================".to_string(),
            format!("Documents: {}", self.total),
            format!("Completed: {}", self.completed),
            format!("Failed: {}", self.failed),
            format!("Records: {}", self.records_written),
            format!("Distinct keys: {}", self.distinct_keys),
            format!("Elapsed: {:.1}s", self.elapsed_ms as f64 / 1000.0),
        ];

        if self.skipped > 0 {
            lines.push(format!("Skipped entries: {}", self.skipped));
        }

        if !self.failed_paths.is_empty() {
            lines.push(String::new());
            lines.push("Failed documents:".to_string());
            for path in &self.failed_paths {
                lines.push(format!("  {}", path.display()));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = PipelineState::new(5);
        assert_eq!(state.total, 5);
        assert_eq!(state.completed, 0);
        assert!(state.keys.is_empty());
    }

    #[test]
    fn test_record_written_counts_distinct_keys() {
        let mut state = PipelineState::new(2);
        state.record_written("Foo");
        state.record_written("Foo");
        state.record_written("Bar");

        let summary = state.summary(0, Duration::ZERO);
        assert_eq!(summary.records_written, 3);
        assert_eq!(summary.distinct_keys, 2);
    }

    #[test]
    fn test_failures_count_as_completed() {
        let mut state = PipelineState::new(3);
        state.record_success();
        state.record_failure(PathBuf::from("/b/Bad.java"));
        state.record_failure(PathBuf::from("/a/Worse.java"));

        let summary = state.summary(1, Duration::from_millis(1500));
        assert!(summary.is_complete());
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(
            summary.failed_paths,
            vec![PathBuf::from("/a/Worse.java"), PathBuf::from("/b/Bad.java")]
        );
    }

    #[test]
    fn test_summary_report() {
        let mut state = PipelineState::new(2);
        state.record_written("Foo");
        state.record_success();
        state.record_failure(PathBuf::from("/corpus/Bad.java"));

        let report = state.summary(3, Duration::from_millis(2500)).summary();
        assert!(report.contains("Documents: 2"));
        assert!(report.contains("Failed: 1"));
        assert!(report.contains("Records: 1"));
        assert!(report.contains("Elapsed: 2.5s"));
        assert!(report.contains("Skipped entries: 3"));
        assert!(report.contains("/corpus/Bad.java"));
    }

    #[test]
    fn test_summary_serializes() {
        let summary = PipelineState::new(0).summary(0, Duration::ZERO);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 0);
        assert_eq!(json["distinct_keys"], 0);
    }
}
