//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use classdoc_pipeline::RunSummary;
use colored::*;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the summary of a finished run.
    pub fn format_summary(&self, summary: &RunSummary, output: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_summary_json(summary, output),
            OutputFormat::Table => Ok(self.format_summary_table(summary, output)),
            OutputFormat::Quiet => Ok(output.display().to_string()),
        }
    }

    fn format_summary_json(&self, summary: &RunSummary, output: &Path) -> Result<String> {
        let value = serde_json::json!({
            "output": output.display().to_string(),
            "summary": summary,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_summary_table(&self, summary: &RunSummary, output: &Path) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Documents", &summary.total.to_string()]);
        builder.push_record(["Completed", &summary.completed.to_string()]);
        builder.push_record(["Failed", &summary.failed.to_string()]);
        if summary.skipped > 0 {
            builder.push_record(["Skipped entries", &summary.skipped.to_string()]);
        }
        builder.push_record(["Records", &summary.records_written.to_string()]);
        builder.push_record(["Distinct keys", &summary.distinct_keys.to_string()]);
        builder.push_record([
            "Elapsed",
            &format!("{:.1}s", summary.elapsed_ms as f64 / 1000.0),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::last()).with(Alignment::right()));

        let mut lines = vec![table.to_string()];

        if !summary.failed_paths.is_empty() {
            lines.push(self.warning(&format!(
                "{} document(s) could not be processed:",
                summary.failed_paths.len()
            )));
            for path in &summary.failed_paths {
                lines.push(format!("  {}", path.display()));
            }
        }

        lines.push(self.success(&format!(
            "Wrote {} sentence(s) to {}",
            summary.records_written,
            output.display()
        )));
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn create_test_summary() -> RunSummary {
        RunSummary {
            total: 12,
            completed: 12,
            failed: 1,
            skipped: 0,
            records_written: 31,
            distinct_keys: 11,
            failed_paths: vec![PathBuf::from("/corpus/Broken.java")],
            elapsed_ms: 1250,
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_summary(&create_test_summary(), Path::new("out.csv"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["output"], "out.csv");
        assert_eq!(value["summary"]["records_written"], 31);
        assert_eq!(value["summary"]["failed_paths"][0], "/corpus/Broken.java");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_summary(&create_test_summary(), Path::new("out.csv"))
            .unwrap();
        assert_eq!(output, "out.csv");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_summary(&create_test_summary(), Path::new("out.csv"))
            .unwrap();
        assert!(output.contains("Documents"));
        assert!(output.contains("Distinct keys"));
        assert!(output.contains("1.2s") || output.contains("1.3s"));
        assert!(output.contains("/corpus/Broken.java"));
        assert!(output.contains("✓ Wrote 31 sentence(s) to out.csv"));
        assert!(!output.contains("Skipped entries"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
