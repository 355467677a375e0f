//! TFRecord reader with strict corruption detection
//!
//! The reader recovers a stream by repeatedly reading one frame,
//! validating both checksums, and advancing to the next offset. Any
//! checksum mismatch or mid-frame end of stream is fatal: no partial
//! results, no skipping frames, no resynchronization attempts. A clean
//! end of stream is only recognized at a frame boundary.

use std::io::{self, Read};

use super::checksum::masked_crc32;
use super::errors::{ChecksumSection, TfRecordError, TfRecordResult};
use super::frame::{FOOTER_LEN, HEADER_LEN, LENGTH_LEN};

/// Sequential TFRecord stream reader.
///
/// Works over any `io::Read`; wrap a `File` in a `BufReader` for
/// file-backed streams. The source's lifecycle stays with the caller.
pub struct TfRecordReader<R: Read> {
    source: R,
    /// Byte offset of the next unread frame, used for error context.
    offset: u64,
}

impl<R: Read> TfRecordReader<R> {
    /// Creates a reader over `source`, which must be positioned at a
    /// frame boundary.
    pub fn new(source: R) -> Self {
        Self { source, offset: 0 }
    }

    /// Returns the byte offset of the next unread frame.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Consumes the reader, returning the source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads the next record from the stream.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` for a valid frame
    /// - `Ok(None)` on clean end of stream at a frame boundary
    /// - `Err(_)` on I/O failure, truncation, or checksum mismatch
    ///
    /// After an error the stream must be considered corrupted from the
    /// reported offset onward; continuing to call `read_next` is not
    /// meaningful.
    pub fn read_next(&mut self) -> TfRecordResult<Option<Vec<u8>>> {
        let mut header = [0u8; HEADER_LEN];
        let filled = self.fill(&mut header)?;
        if filled == 0 {
            return Ok(None);
        }
        if filled < HEADER_LEN {
            return Err(TfRecordError::Truncated {
                offset: self.offset,
                reason: format!(
                    "stream ended inside frame header: {} of {} bytes",
                    filled, HEADER_LEN
                ),
            });
        }

        // Validate the length checksum before trusting the length, so a
        // corrupted length field cannot drive a huge allocation or a
        // misaligned payload read.
        let length_bytes: [u8; LENGTH_LEN] =
            header[..LENGTH_LEN].try_into().expect("slice length fixed");
        let stored_length_crc = u32::from_le_bytes(
            header[LENGTH_LEN..HEADER_LEN]
                .try_into()
                .expect("slice length fixed"),
        );
        let computed_length_crc = masked_crc32(&length_bytes);
        if computed_length_crc != stored_length_crc {
            return Err(TfRecordError::ChecksumMismatch {
                section: ChecksumSection::Length,
                offset: self.offset + LENGTH_LEN as u64,
                stored: stored_length_crc,
                computed: computed_length_crc,
            });
        }

        let payload_len = u64::from_le_bytes(length_bytes);
        let payload_len = usize::try_from(payload_len).map_err(|_| TfRecordError::Truncated {
            offset: self.offset,
            reason: format!("frame declares {} payload bytes", payload_len),
        })?;

        let mut payload = vec![0u8; payload_len];
        self.read_exact_or_truncated(&mut payload, HEADER_LEN as u64, "frame payload")?;

        let mut footer = [0u8; FOOTER_LEN];
        self.read_exact_or_truncated(
            &mut footer,
            (HEADER_LEN + payload_len) as u64,
            "payload checksum",
        )?;

        let stored_payload_crc = u32::from_le_bytes(footer);
        let computed_payload_crc = masked_crc32(&payload);
        if computed_payload_crc != stored_payload_crc {
            return Err(TfRecordError::ChecksumMismatch {
                section: ChecksumSection::Data,
                offset: self.offset + (HEADER_LEN + payload_len) as u64,
                stored: stored_payload_crc,
                computed: computed_payload_crc,
            });
        }

        self.offset += (HEADER_LEN + payload_len + FOOTER_LEN) as u64;
        Ok(Some(payload))
    }

    /// Reads every remaining record into a vector.
    pub fn read_all(&mut self) -> TfRecordResult<Vec<Vec<u8>>> {
        let mut records = Vec::new();
        while let Some(payload) = self.read_next()? {
            records.push(payload);
        }
        Ok(records)
    }

    /// Fills `buf` as far as the stream allows, returning the number of
    /// bytes read. Distinguishes clean end of stream (0) from a partial
    /// fill so the caller can tell a frame boundary from truncation.
    fn fill(&mut self, buf: &mut [u8]) -> TfRecordResult<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    /// Reads exactly `buf.len()` bytes at `frame_offset` bytes into the
    /// current frame, mapping a short read to a truncation error.
    fn read_exact_or_truncated(
        &mut self,
        buf: &mut [u8],
        frame_offset: u64,
        what: &str,
    ) -> TfRecordResult<()> {
        let filled = self.fill(buf)?;
        if filled < buf.len() {
            return Err(TfRecordError::Truncated {
                offset: self.offset + frame_offset,
                reason: format!(
                    "stream ended inside {}: {} of {} bytes",
                    what,
                    filled,
                    buf.len()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfrecord::frame::{encode_frame, FRAME_OVERHEAD};
    use std::io::Cursor;

    fn stream_of(payloads: &[&[u8]]) -> Vec<u8> {
        let mut stream = Vec::new();
        for p in payloads {
            stream.extend_from_slice(&encode_frame(p));
        }
        stream
    }

    #[test]
    fn test_empty_stream_yields_none() {
        let mut reader = TfRecordReader::new(Cursor::new(Vec::new()));
        assert!(reader.read_next().unwrap().is_none());
    }

    #[test]
    fn test_single_record() {
        let stream = stream_of(&[b"hello"]);
        let mut reader = TfRecordReader::new(Cursor::new(stream));

        assert_eq!(reader.read_next().unwrap().unwrap(), b"hello");
        assert!(reader.read_next().unwrap().is_none());
    }

    #[test]
    fn test_multi_record_stream_in_order() {
        let stream = stream_of(&[b"p1", b"p2", b"p3"]);
        let mut reader = TfRecordReader::new(Cursor::new(stream));

        let records = reader.read_all().unwrap();
        assert_eq!(records, vec![b"p1".to_vec(), b"p2".to_vec(), b"p3".to_vec()]);
    }

    #[test]
    fn test_empty_payload_record() {
        let stream = stream_of(&[b"", b"after"]);
        let mut reader = TfRecordReader::new(Cursor::new(stream));

        assert_eq!(reader.read_next().unwrap().unwrap(), Vec::<u8>::new());
        assert_eq!(reader.read_next().unwrap().unwrap(), b"after");
    }

    #[test]
    fn test_offset_advances_by_frame_length() {
        let stream = stream_of(&[b"hello", b"world!"]);
        let mut reader = TfRecordReader::new(Cursor::new(stream));

        assert_eq!(reader.offset(), 0);
        reader.read_next().unwrap();
        assert_eq!(reader.offset(), (5 + FRAME_OVERHEAD) as u64);
        reader.read_next().unwrap();
        assert_eq!(reader.offset(), (5 + 6 + 2 * FRAME_OVERHEAD) as u64);
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        let stream = stream_of(&[b"hello"]);
        let mut reader = TfRecordReader::new(Cursor::new(stream[..7].to_vec()));

        let err = reader.read_next().unwrap_err();
        assert!(matches!(err, TfRecordError::Truncated { .. }));
    }

    #[test]
    fn test_truncated_payload_is_an_error() {
        let stream = stream_of(&[b"a longer payload"]);
        let cut = stream.len() - FOOTER_LEN - 3;
        let mut reader = TfRecordReader::new(Cursor::new(stream[..cut].to_vec()));

        let err = reader.read_next().unwrap_err();
        assert!(matches!(err, TfRecordError::Truncated { .. }));
    }

    #[test]
    fn test_truncated_footer_is_an_error() {
        let stream = stream_of(&[b"payload"]);
        let mut reader = TfRecordReader::new(Cursor::new(stream[..stream.len() - 1].to_vec()));

        let err = reader.read_next().unwrap_err();
        assert!(matches!(err, TfRecordError::Truncated { .. }));
    }

    #[test]
    fn test_corrupted_payload_rejected() {
        let mut stream = stream_of(&[b"payload bytes"]);
        stream[HEADER_LEN + 4] ^= 0x10;

        let mut reader = TfRecordReader::new(Cursor::new(stream));
        let err = reader.read_next().unwrap_err();
        assert!(matches!(
            err,
            TfRecordError::ChecksumMismatch {
                section: ChecksumSection::Data,
                ..
            }
        ));
    }

    #[test]
    fn test_corrupted_length_rejected_before_payload_read() {
        let mut stream = stream_of(&[b"payload bytes"]);
        stream[0] ^= 0x01;

        let mut reader = TfRecordReader::new(Cursor::new(stream));
        let err = reader.read_next().unwrap_err();
        assert!(matches!(
            err,
            TfRecordError::ChecksumMismatch {
                section: ChecksumSection::Length,
                ..
            }
        ));
    }

    #[test]
    fn test_error_offset_points_into_second_frame() {
        let mut stream = stream_of(&[b"good", b"bad record"]);
        let second_frame_start = 4 + FRAME_OVERHEAD;
        stream[second_frame_start + HEADER_LEN] ^= 0xff;

        let mut reader = TfRecordReader::new(Cursor::new(stream));
        assert_eq!(reader.read_next().unwrap().unwrap(), b"good");

        match reader.read_next().unwrap_err() {
            TfRecordError::ChecksumMismatch { offset, .. } => {
                assert_eq!(offset, (second_frame_start + HEADER_LEN + 10) as u64);
            }
            other => panic!("expected checksum mismatch, got {:?}", other),
        }
    }
}
