//! Record sink port — where emitted records go.

use sensorsim_domain::record::Record;

/// Errors raised while emitting a record.
///
/// These are failures of the simulator itself (e.g. a closed stdout pipe),
/// unlike simulated sensor errors which are ordinary records.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The record could not be serialized.
    #[error("failed to serialize record")]
    Serialize(#[source] serde_json::Error),

    /// The underlying writer failed.
    #[error("failed to write record")]
    Io(#[from] std::io::Error),
}

/// Accepts records one at a time, in emission order.
pub trait RecordSink {
    /// Emit a single record.
    ///
    /// # Errors
    ///
    /// Returns an [`EmitError`] if the record could not be delivered.
    fn emit(&mut self, record: &Record) -> Result<(), EmitError>;
}

impl<T: RecordSink + ?Sized> RecordSink for &mut T {
    fn emit(&mut self, record: &Record) -> Result<(), EmitError> {
        (**self).emit(record)
    }
}
