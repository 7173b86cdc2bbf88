//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Classdoc - Extract class description sentences from Java sources and Javadoc pages.
#[derive(Debug, Parser)]
#[command(name = "classdoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format for the run summary
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CLASSDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (output path only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract description sentences from a corpus into a CSV file
    Extract(ExtractArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Files or directories to scan
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,

    /// Number of documents processed concurrently
    #[arg(short = 'n', long)]
    pub num_threads: Option<usize>,

    /// Output CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Derive keys from paths relative to this directory (java/util/List.java -> java.util.List)
    #[arg(long)]
    pub relative_root: Option<PathBuf>,

    /// CSS selector for description blocks in HTML pages
    #[arg(long)]
    pub selector: Option<String>,

    /// Key each HTML description block separately (Key#1, Key#2, ...)
    #[arg(long)]
    pub fragment_keys: bool,

    /// Replacement token for <pre> blocks
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Seconds in-flight documents may take to finish after Ctrl-C
    #[arg(long)]
    pub drain_timeout: Option<u64>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "classdoc",
            "extract",
            "-n",
            "4",
            "-o",
            "out.csv",
            "--fragment-keys",
            "src",
            "docs/api",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.num_threads, Some(4));
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert!(args.fragment_keys);
                assert_eq!(args.sources, vec![PathBuf::from("src"), PathBuf::from("docs/api")]);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_sources_are_required() {
        assert!(Cli::try_parse_from(["classdoc", "extract"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["classdoc", "extract", "src", "-vv", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_config_command() {
        let cli = Cli::parse_from(["classdoc", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            })
        ));
    }
}
