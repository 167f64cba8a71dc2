//! # sensorsim-adapter-stdout
//!
//! Line-oriented JSON emitter. Each record becomes exactly one line, the
//! format log shippers (Filebeat, Fluent Bit, …) tail and forward as-is.
//!
//! The writer is flushed after every line so records become visible to a
//! tailing reader as soon as they are produced.
//!
//! ## Dependency rule
//!
//! Depends on `sensorsim-app` (port traits) and `sensorsim-domain` only.

use std::io::{self, Write};

use sensorsim_app::ports::{EmitError, RecordSink};
use sensorsim_domain::record::Record;

/// [`RecordSink`] writing newline-delimited JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
    lines: u64,
}

impl JsonLinesSink<io::Stdout> {
    /// Sink writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLinesSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Consume the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn emit(&mut self, record: &Record) -> Result<(), EmitError> {
        let mut line = serde_json::to_vec(record).map_err(EmitError::Serialize)?;
        line.push(b'\n');

        self.writer.write_all(&line).inspect_err(|err| {
            tracing::warn!(error = %err, level = %record.level(), "failed to write record");
        })?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }
}
