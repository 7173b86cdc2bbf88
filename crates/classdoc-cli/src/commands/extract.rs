//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use classdoc_domain::KeyStrategy;
use classdoc_extractor::Extractor;
use classdoc_pipeline::{
    BarReporter, Corpus, Pipeline, PipelineError, ProgressReporter, RecordSink, SilentReporter,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    validate_sources(&args.sources)?;
    let strategy = key_strategy(args.relative_root.as_deref())?;

    config.apply_args(&args);
    config.validate()?;

    let extractor = Extractor::with_config(config.extractor.clone())?;
    let pipeline = Pipeline::new(extractor, config.pipeline.clone())?;

    let progress: Arc<dyn ProgressReporter> = if config.output.progress {
        Arc::new(BarReporter::new())
    } else {
        Arc::new(SilentReporter)
    };
    progress.set_message("scanning");

    let corpus = Corpus::discover(&args.sources, &strategy, config.pipeline.follow_links);
    if corpus.is_empty() {
        eprintln!("{}", formatter.warning("No .java, .html or .htm files found"));
    }

    let sink = RecordSink::create(&config.output.path).map_err(PipelineError::from)?;
    let summary = pipeline
        .run_until(corpus, Arc::new(sink), progress, shutdown_signal())
        .await?;

    eprintln!("{}", formatter.format_summary(&summary, &config.output.path)?);

    if !summary.is_complete() {
        return Err(CliError::Interrupted {
            completed: summary.completed,
            total: summary.total,
        });
    }
    Ok(())
}

/// Every source must exist and be readable before any work starts.
fn validate_sources(sources: &[PathBuf]) -> Result<()> {
    for source in sources {
        let readable = match fs::metadata(source) {
            Ok(meta) if meta.is_dir() => fs::read_dir(source).map(|_| ()),
            Ok(_) => fs::File::open(source).map(|_| ()),
            Err(e) => Err(e),
        };
        readable.map_err(|e| {
            CliError::InvalidInput(format!("Cannot read source {}: {}", source.display(), e))
        })?;
    }
    Ok(())
}

fn key_strategy(relative_root: Option<&Path>) -> Result<KeyStrategy> {
    match relative_root {
        None => Ok(KeyStrategy::BaseName),
        Some(root) => {
            // documents are canonicalized, so the root must be too
            let root = root.canonicalize().map_err(|e| {
                CliError::InvalidInput(format!("Invalid relative root {}: {}", root.display(), e))
            })?;
            Ok(KeyStrategy::RelativeTo(root))
        }
    }
}

/// Resolves on Ctrl-C; never resolves if the signal cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
