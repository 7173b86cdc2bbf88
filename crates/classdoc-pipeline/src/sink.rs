//! Shared CSV output

use crate::error::SinkError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Header row of the output table
pub const HEADER: [&str; 2] = ["Class", "Sentence"];

/// Thread-safe CSV writer shared by all workers
///
/// Each [`append`](RecordSink::append) writes one complete row while holding
/// the lock, so rows from different workers never interleave.
pub struct RecordSink<W: Write> {
    writer: Mutex<Option<csv::Writer<W>>>,
}

impl RecordSink<BufWriter<File>> {
    /// Create (or truncate) the output file and write the header
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let file = File::create(path.as_ref())?;
        Self::from_writer(BufWriter::new(file))
    }
}

impl<W: Write> RecordSink<W> {
    /// Wrap an arbitrary writer and write the header
    pub fn from_writer(inner: W) -> Result<Self, SinkError> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self {
            writer: Mutex::new(Some(writer)),
        })
    }

    /// Append one `(key, sentence)` row
    pub fn append(&self, key: &str, sentence: &str) -> Result<(), SinkError> {
        let mut guard = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        let writer = guard.as_mut().ok_or(SinkError::Closed)?;
        writer.write_record([key, sentence])?;
        Ok(())
    }

    /// Flush and close the sink, returning the underlying writer
    pub fn close(&self) -> Result<W, SinkError> {
        let mut guard = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        let writer = guard.take().ok_or(SinkError::Closed)?;
        writer.into_inner().map_err(|e| SinkError::Io(e.into_error()))
    }

    /// True once [`close`](RecordSink::close) has been called
    pub fn is_closed(&self) -> bool {
        self.writer.lock().map(|guard| guard.is_none()).unwrap_or(true)
    }
}
