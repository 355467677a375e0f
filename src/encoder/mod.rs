//! Row-to-bytes adapter over the TFRecord writer
//!
//! Bridges a structured-row producer to a TFRecord sink: one configured
//! field of each row holds the payload bytes, everything else in the
//! row is ignored. The field index is fixed at construction and never
//! changes over the encoder's lifetime.

mod errors;
mod row;

pub use errors::{EncodeError, EncodeResult};
pub use row::{FieldValue, Row};

use std::io::Write;

use crate::tfrecord::TfRecordWriter;

/// Encodes one row per call by framing its payload field into the sink.
///
/// Field extraction errors (bad index, null, non-bytes value) are
/// raised before any byte is written, so they never leave a partial
/// frame in the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfRecordRowEncoder {
    value_idx: usize,
}

impl TfRecordRowEncoder {
    /// Creates an encoder reading payload bytes from field `value_idx`.
    pub fn new(value_idx: usize) -> Self {
        Self { value_idx }
    }

    /// Returns the configured payload field index.
    pub fn value_idx(&self) -> usize {
        self.value_idx
    }

    /// Extracts the payload field from `row` and appends it to `sink`
    /// as one TFRecord frame.
    ///
    /// # Errors
    ///
    /// - Field errors from the typed accessor, before any sink write
    /// - `Io` for sink write failures, propagated unchanged
    pub fn encode<W: Write>(&self, row: &Row, sink: &mut W) -> EncodeResult<()> {
        let payload = row.bytes_at(self.value_idx)?;
        let mut writer = TfRecordWriter::new(sink);
        writer.write_record(payload)?;
        Ok(())
    }
}

impl Default for TfRecordRowEncoder {
    /// Payload bytes in field 0.
    fn default() -> Self {
        Self::new(0)
    }
}
