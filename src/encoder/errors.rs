//! Row encoder error types

use std::io;

use thiserror::Error;

/// Result type for row encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Row-to-bytes encoding errors.
///
/// All field errors are raised before any byte reaches the sink, so a
/// failed encode never leaves a partial frame behind.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The configured field index does not exist in the row.
    #[error("field index {index} out of range for row of width {width}")]
    FieldOutOfRange { index: usize, width: usize },

    /// The targeted field is null.
    #[error("field {index} is null, expected bytes")]
    NullField { index: usize },

    /// The targeted field holds a non-bytes value.
    #[error("field {index} is {found}, expected bytes")]
    FieldNotBytes { index: usize, found: &'static str },

    /// Sink write failure, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
