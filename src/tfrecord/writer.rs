//! TFRecord writer over a caller-owned sink
//!
//! The writer frames payloads and appends them to any `io::Write`. It
//! never opens, flushes on drop, or closes the sink: acquisition and
//! release stay with the caller on all exit paths. There is no retry
//! and no buffering policy beyond what the sink itself provides.

use std::io::{self, Write};

use super::frame::encode_frame;

/// Appends TFRecord frames to a sink.
///
/// Consecutive calls append successive independent frames; no state is
/// kept between calls other than the sink handle. Not safe for
/// concurrent use on one sink: a frame's segments must land
/// contiguously, so concurrent producers must serialize externally.
pub struct TfRecordWriter<W: Write> {
    sink: W,
}

impl<W: Write> TfRecordWriter<W> {
    /// Creates a writer over `sink`.
    ///
    /// `sink` may be an owned value or a `&mut` borrow; either way the
    /// caller keeps lifecycle responsibility.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Frames `payload` and appends it to the sink.
    ///
    /// `payload` may be empty. Success means all frame bytes were
    /// handed to the sink.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error unchanged. A partial frame may
    /// have been written before the failure; the caller must treat the
    /// sink as truncated and perform any cleanup itself.
    pub fn write_record(&mut self, payload: &[u8]) -> io::Result<()> {
        let frame = encode_frame(payload);
        self.sink.write_all(&frame)
    }

    /// Frames every payload in order.
    ///
    /// Stops at the first sink error; earlier frames remain written.
    pub fn write_records<I>(&mut self, payloads: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for payload in payloads {
            self.write_record(payload.as_ref())?;
        }
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Returns a shared reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consumes the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
