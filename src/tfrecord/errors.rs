//! Error types for TFRecord framing

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type for TFRecord framing operations
pub type TfRecordResult<T> = Result<T, TfRecordError>;

/// Which checksum of a frame failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumSection {
    /// Checksum over the 8-byte length encoding
    Length,
    /// Checksum over the payload bytes
    Data,
}

impl fmt::Display for ChecksumSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumSection::Length => write!(f, "length"),
            ChecksumSection::Data => write!(f, "data"),
        }
    }
}

/// TFRecord framing errors.
///
/// Sink/source I/O errors are propagated unchanged; checksum and
/// truncation failures carry the byte offset where validation failed so
/// a caller can report the corruption point.
#[derive(Debug, Error)]
pub enum TfRecordError {
    /// Underlying sink or source I/O failure, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended inside a frame.
    ///
    /// A truncated frame is fatal for the stream: no resynchronization
    /// is attempted.
    #[error("truncated record at byte offset {offset}: {reason}")]
    Truncated { offset: u64, reason: String },

    /// A stored checksum disagrees with the recomputed value.
    ///
    /// Fatal for the stream, treated the same as truncation.
    #[error(
        "{section} checksum mismatch at byte offset {offset}: computed {computed:08x}, stored {stored:08x}"
    )]
    ChecksumMismatch {
        section: ChecksumSection,
        offset: u64,
        stored: u32,
        computed: u32,
    },
}

impl TfRecordError {
    /// Returns true if this error indicates a corrupted or truncated
    /// stream rather than a plain I/O failure.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            TfRecordError::Truncated { .. } | TfRecordError::ChecksumMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_mismatch_display_contains_context() {
        let err = TfRecordError::ChecksumMismatch {
            section: ChecksumSection::Data,
            offset: 42,
            stored: 0xdead_beef,
            computed: 0x1234_5678,
        };
        let display = format!("{}", err);
        assert!(display.contains("data checksum mismatch"));
        assert!(display.contains("offset 42"));
        assert!(display.contains("deadbeef"));
        assert!(display.contains("12345678"));
    }

    #[test]
    fn test_corruption_classification() {
        let truncated = TfRecordError::Truncated {
            offset: 0,
            reason: "header incomplete".to_string(),
        };
        assert!(truncated.is_corruption());

        let io_err = TfRecordError::Io(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(!io_err.is_corruption());
    }
}
