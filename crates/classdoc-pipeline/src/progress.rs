//! Progress reporting

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Receives progress updates from the pipeline
///
/// Implementations must never block for long and never fail: progress is
/// advisory and is updated from worker tasks.
pub trait ProgressReporter: Send + Sync {
    /// Total number of documents, once known
    fn set_total(&self, total: u64);

    /// Short status message
    fn set_message(&self, message: &str);

    /// One document finished
    fn step(&self);

    /// The run is over
    fn finish(&self);
}

/// Terminal progress bar drawn on stderr
///
/// Starts as a spinner and turns into a bar once the total is set.
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    /// Create a reporter drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Create a reporter that draws nothing, for tests
    pub fn hidden() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_draw_target(ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Current position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total, if known
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl Default for BarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for BarReporter {
    fn set_total(&self, total: u64) {
        self.bar.set_length(total);
        self.bar.set_style(bar_style());
    }

    fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    fn step(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} docs ({eta}) {msg}",
    )
    .map(|style| style.progress_chars("#>-"))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Reporter that ignores every update
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn set_total(&self, _total: u64) {}
    fn set_message(&self, _message: &str) {}
    fn step(&self) {}
    fn finish(&self) {}
}
