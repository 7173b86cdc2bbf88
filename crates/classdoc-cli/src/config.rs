//! Configuration management for the CLI.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! the TOML configuration file, and command-line flags.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use classdoc_extractor::ExtractorConfig;
use classdoc_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Concurrency settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// CSV file to write
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Show a progress bar
    #[serde(default = "default_true")]
    pub progress: bool,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Format of the run summary
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Default configuration file location (`<config dir>/classdoc/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Could not find configuration directory".into()))?;
        Ok(dir.join("classdoc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicitly given file must exist. Without one, the default location
    /// is used if a file is there, and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::Config(format!(
                        "Configuration file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Ok(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Override settings with command-line flags.
    pub fn apply_args(&mut self, args: &ExtractArgs) {
        if let Some(n) = args.num_threads {
            self.pipeline.worker_count = n;
        }
        if let Some(secs) = args.drain_timeout {
            self.pipeline.drain_timeout_secs = secs;
        }
        if args.follow_links {
            self.pipeline.follow_links = true;
        }
        if let Some(output) = &args.output {
            self.output.path = output.clone();
        }
        if args.no_progress {
            self.output.progress = false;
        }
        if let Some(selector) = &args.selector {
            self.extractor.description_selector = selector.clone();
        }
        if let Some(placeholder) = &args.placeholder {
            self.extractor.placeholder = placeholder.clone();
        }
        if args.fragment_keys {
            self.extractor.fragment_keys = true;
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("[extractor] {}", e)))?;
        self.pipeline
            .validate()
            .map_err(|e| CliError::Config(format!("[pipeline] {}", e)))?;
        if self.output.path.as_os_str().is_empty() {
            return Err(CliError::Config("[output] path must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            progress: true,
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("classdoc.csv")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use tempfile::TempDir;

    fn extract_args(argv: &[&str]) -> ExtractArgs {
        let mut full = vec!["classdoc", "extract"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Command::Extract(args) => args,
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.path, PathBuf::from("classdoc.csv"));
        assert!(config.output.progress);
        assert!(config.output.color);
        assert_eq!(config.extractor.placeholder, "code-example");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config: Config = toml::from_str(
            r#"
[pipeline]
worker_count = 3

[output]
path = "out/sentences.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.pipeline.worker_count, 3);
        assert_eq!(config.pipeline.drain_timeout_secs, 30);
        assert_eq!(config.output.path, PathBuf::from("out/sentences.csv"));
        assert!(config.output.color);
        assert!(config.extractor.paragraph_breaks);
    }

    #[test]
    fn test_flags_override_file() {
        let mut config: Config = toml::from_str(
            r#"
[extractor]
placeholder = "CODE"
fragment_keys = false

[pipeline]
worker_count = 3
"#,
        )
        .unwrap();

        config.apply_args(&extract_args(&[
            "-n",
            "7",
            "--fragment-keys",
            "--no-progress",
            "-o",
            "x.csv",
            "src",
        ]));

        assert_eq!(config.pipeline.worker_count, 7);
        assert!(config.extractor.fragment_keys);
        assert_eq!(config.extractor.placeholder, "CODE");
        assert!(!config.output.progress);
        assert_eq!(config.output.path, PathBuf::from("x.csv"));
    }

    #[test]
    fn test_invalid_values_are_reported_by_section() {
        let mut config = Config::default();
        config.pipeline.worker_count = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[pipeline]"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert_eq!(loaded.pipeline.worker_count, config.pipeline.worker_count);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
