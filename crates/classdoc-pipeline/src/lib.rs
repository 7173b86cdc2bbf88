//! Classdoc Pipeline
//!
//! Runs extraction over a whole corpus of documentation files.
//!
//! # Overview
//!
//! - **Discovery**: [`Corpus::discover`] walks the given roots and keeps
//!   files whose extension maps to a known format
//! - **Dispatch**: [`Pipeline`] extracts documents concurrently, bounded by
//!   `worker_count`, on tokio's blocking pool
//! - **Output**: every sanitized sentence is appended to one shared
//!   [`RecordSink`] (CSV with a `Class,Sentence` header)
//! - **Accounting**: [`RunSummary`] reports completed, failed and written
//!   counts; a [`ProgressReporter`] is stepped once per document
//!
//! # Failure handling
//!
//! | Failure | Effect |
//! |---------|--------|
//! | Unreadable directory entry | logged, counted as skipped |
//! | Unreadable or malformed document | logged, path listed in the summary, run continues |
//! | Contract violation in extraction | dispatch stops, in-flight work drains, run fails |
//! | Output write error | dispatch stops, in-flight work drains, run fails |
//! | Drain exceeds `drain_timeout_secs` | run fails with [`PipelineError::DrainTimeout`] |
//!
//! # Configuration
//!
//! ```toml
//! [pipeline]
//! worker_count = 8
//! drain_timeout_secs = 30
//! follow_links = false
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod pipeline;
mod progress;
mod sink;
mod state;
mod walker;

pub use error::{PipelineError, SinkError};
pub use config::{default_worker_count, PipelineConfig};
pub use pipeline::Pipeline;
pub use progress::{BarReporter, ProgressReporter, SilentReporter};
pub use sink::{RecordSink, HEADER};
pub use state::{PipelineState, RunSummary};
pub use walker::Corpus;
