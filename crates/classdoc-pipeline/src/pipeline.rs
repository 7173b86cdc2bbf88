//! Concurrent extraction over a corpus

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::progress::ProgressReporter;
use crate::sink::RecordSink;
use crate::state::{PipelineState, RunSummary};
use crate::walker::Corpus;
use classdoc_domain::Document;
use classdoc_extractor::{is_emittable, sanitize, DocumentExtractor, ExtractorError};
use std::future::Future;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tokio::time::timeout;

/// Runs a [`DocumentExtractor`] over every document of a corpus
///
/// At most `worker_count` documents are in flight at once. Each document is
/// extracted on the blocking thread pool and its sentences are sanitized and
/// appended to a shared [`RecordSink`].
///
/// A document that cannot be read or parsed is logged and skipped. A
/// contract violation or an output error stops the run.
///
/// # Examples
///
/// ```no_run
/// use classdoc_domain::KeyStrategy;
/// use classdoc_extractor::{Extractor, ExtractorConfig};
/// use classdoc_pipeline::{Corpus, Pipeline, PipelineConfig, RecordSink, SilentReporter};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let extractor = Extractor::with_config(ExtractorConfig::default())?;
///     let pipeline = Pipeline::new(extractor, PipelineConfig::default())?;
///
///     let corpus = Corpus::discover(&["docs/api"], &KeyStrategy::BaseName, false);
///     let sink = Arc::new(RecordSink::create("classdoc.csv")?);
///
///     let summary = pipeline.run(corpus, sink, Arc::new(SilentReporter)).await?;
///     println!("{}", summary.summary());
///     Ok(())
/// }
/// ```
pub struct Pipeline<E>
where
    E: DocumentExtractor + 'static,
{
    extractor: Arc<E>,
    config: PipelineConfig,
}

impl<E> Pipeline<E>
where
    E: DocumentExtractor + 'static,
{
    /// Create a new Pipeline
    pub fn new(extractor: E, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        Ok(Self {
            extractor: Arc::new(extractor),
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process the whole corpus, then flush and close the sink
    pub async fn run<W>(
        &self,
        corpus: Corpus,
        sink: Arc<RecordSink<W>>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Result<RunSummary, PipelineError>
    where
        W: Write + Send + 'static,
    {
        self.run_until(corpus, sink, progress, std::future::pending())
            .await
    }

    /// Process the corpus until it is done or `shutdown` resolves.
    ///
    /// After a shutdown request no new documents are started and in-flight
    /// documents get `drain_timeout` to finish. Documents never started are
    /// not counted as completed.
    pub async fn run_until<W, F>(
        &self,
        corpus: Corpus,
        sink: Arc<RecordSink<W>>,
        progress: Arc<dyn ProgressReporter>,
        shutdown: F,
    ) -> Result<RunSummary, PipelineError>
    where
        W: Write + Send + 'static,
        F: Future<Output = ()>,
    {
        let started = Instant::now();
        let skipped = corpus.skipped();
        let state = Arc::new(Mutex::new(PipelineState::new(corpus.len())));
        let semaphore = Arc::new(Semaphore::new(self.config.worker_count));
        let mut tasks: JoinSet<Result<(), PipelineError>> = JoinSet::new();
        let mut fatal: Option<PipelineError> = None;
        let mut interrupted = false;

        tracing::info!(
            "Processing {} documents with {} workers",
            corpus.len(),
            self.config.worker_count
        );
        progress.set_total(corpus.len() as u64);
        progress.set_message("extracting");

        tokio::pin!(shutdown);

        'dispatch: for document in corpus {
            let permit = loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown => {
                        tracing::info!("Shutdown requested, draining in-flight documents");
                        interrupted = true;
                        break 'dispatch;
                    }
                    Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                        if let Err(e) = flatten(joined) {
                            tracing::error!("Stopping dispatch: {}", e);
                            fatal = Some(e);
                            break 'dispatch;
                        }
                    }
                    permit = Arc::clone(&semaphore).acquire_owned() => {
                        break permit.map_err(|e| PipelineError::Worker(e.to_string()))?;
                    }
                }
            };

            let extractor = Arc::clone(&self.extractor);
            let sink = Arc::clone(&sink);
            let state = Arc::clone(&state);
            let progress = Arc::clone(&progress);
            tasks.spawn(async move {
                let result = process(extractor, document, sink, state, progress).await;
                drop(permit);
                result
            });
        }

        if fatal.is_some() || interrupted {
            let drain = self.config.drain_timeout();
            if timeout(drain, join_all(&mut tasks, &mut fatal)).await.is_err() {
                let remaining = tasks.len();
                tasks.abort_all();
                progress.finish();
                tracing::error!(
                    "{} documents still in flight after {:?}, abandoning run",
                    remaining,
                    drain
                );
                // surface the original failure if there was one
                return Err(fatal.unwrap_or(PipelineError::DrainTimeout(drain, remaining)));
            }
        } else {
            join_all(&mut tasks, &mut fatal).await;
        }
        progress.finish();

        let closed = sink.close().map(|_| ());
        if let Some(e) = fatal {
            return Err(e);
        }
        closed?;

        let summary = lock(&state).summary(skipped, started.elapsed());
        tracing::info!(
            "Run finished: {}/{} documents, {} failed, {} records",
            summary.completed,
            summary.total,
            summary.failed,
            summary.records_written
        );
        tracing::debug!("{}", summary.summary());
        Ok(summary)
    }
}

/// Wait for every task, keeping the first fatal error
async fn join_all(
    tasks: &mut JoinSet<Result<(), PipelineError>>,
    fatal: &mut Option<PipelineError>,
) {
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = flatten(joined) {
            tracing::error!("{}", e);
            fatal.get_or_insert(e);
        }
    }
}

fn flatten(joined: Result<Result<(), PipelineError>, JoinError>) -> Result<(), PipelineError> {
    joined.map_err(|e| PipelineError::Worker(e.to_string()))?
}

/// How one document ended
enum Outcome {
    Done,
    Failed(ExtractorError),
    Panicked(String),
    Fatal(PipelineError),
}

/// Extract one document on the blocking pool and account for it exactly once
async fn process<E, W>(
    extractor: Arc<E>,
    document: Document,
    sink: Arc<RecordSink<W>>,
    state: Arc<Mutex<PipelineState>>,
    progress: Arc<dyn ProgressReporter>,
) -> Result<(), PipelineError>
where
    E: DocumentExtractor + 'static,
    W: Write + Send + 'static,
{
    let path = document.path.clone();
    let worker_state = Arc::clone(&state);
    let joined = tokio::task::spawn_blocking(move || {
        extract_and_write(extractor.as_ref(), &document, &sink, &worker_state)
    })
    .await;

    let outcome = joined.unwrap_or_else(|e| Outcome::Panicked(e.to_string()));

    let result = match outcome {
        Outcome::Done => {
            lock(&state).record_success();
            Ok(())
        }
        Outcome::Failed(e) => {
            tracing::warn!("Skipping {}: {}", path.display(), e);
            lock(&state).record_failure(path);
            Ok(())
        }
        Outcome::Panicked(reason) => {
            tracing::warn!("Extraction of {} panicked: {}", path.display(), reason);
            lock(&state).record_failure(path);
            Ok(())
        }
        Outcome::Fatal(e) => {
            lock(&state).record_failure(path);
            Err(e)
        }
    };
    progress.step();
    result
}

fn extract_and_write<E, W>(
    extractor: &E,
    document: &Document,
    sink: &RecordSink<W>,
    state: &Mutex<PipelineState>,
) -> Outcome
where
    E: DocumentExtractor,
    W: Write,
{
    let records = match extractor.extract(document) {
        Ok(records) => records,
        Err(e) if e.is_contract_violation() => {
            return Outcome::Fatal(PipelineError::ContractViolation(e));
        }
        Err(e) => return Outcome::Failed(e),
    };

    for record in records {
        let sentence = sanitize(&record.sentence);
        let sentence = sentence.trim();
        if !is_emittable(sentence) {
            tracing::debug!(
                "Dropping '{}' from {}: nothing left after sanitizing",
                record.sentence,
                record.key
            );
            continue;
        }
        if let Err(e) = sink.append(&record.key, sentence) {
            return Outcome::Fatal(e.into());
        }
        lock(state).record_written(&record.key);
    }
    Outcome::Done
}

fn lock(state: &Mutex<PipelineState>) -> MutexGuard<'_, PipelineState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
