//! TFRecord frame layout and slice-based encode/decode
//!
//! Each record is framed as, all integers little-endian:
//! - Payload length (u64 LE)
//! - Masked CRC32C of the 8 length bytes (u32 LE)
//! - Payload (variable)
//! - Masked CRC32C of the payload (u32 LE)
//!
//! Frames are written back-to-back with no separators; the length field
//! makes the format self-delimiting. Every frame is independently
//! decodable given only the byte offset of its start.

use super::checksum::masked_crc32;
use super::errors::{ChecksumSection, TfRecordError, TfRecordResult};

/// Size of the length field.
pub const LENGTH_LEN: usize = 8;

/// Size of the frame header: length field plus its checksum.
pub const HEADER_LEN: usize = 12;

/// Size of the trailing payload checksum.
pub const FOOTER_LEN: usize = 4;

/// Fixed per-frame overhead: a frame is exactly `payload.len() + 16`
/// bytes.
pub const FRAME_OVERHEAD: usize = HEADER_LEN + FOOTER_LEN;

/// Encodes one payload into a complete frame.
///
/// Deterministic: the same payload always produces the same bytes.
/// Empty payloads are legal and produce a 16-byte frame.
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let length_bytes = (payload.len() as u64).to_le_bytes();

    let mut frame = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
    frame.extend_from_slice(&length_bytes);
    frame.extend_from_slice(&masked_crc32(&length_bytes).to_le_bytes());
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&masked_crc32(payload).to_le_bytes());

    frame
}

/// Decodes one frame from the start of `data`, validating both
/// checksums.
///
/// Returns the payload and the number of bytes consumed; bytes past the
/// frame are ignored, so a caller can advance by the consumed count and
/// decode the next frame.
///
/// # Errors
///
/// - `Truncated` if `data` ends inside the frame
/// - `ChecksumMismatch` if either stored checksum disagrees with the
///   recomputed value
pub fn decode_frame(data: &[u8]) -> TfRecordResult<(Vec<u8>, usize)> {
    if data.len() < HEADER_LEN {
        return Err(TfRecordError::Truncated {
            offset: 0,
            reason: format!(
                "need {} bytes for frame header, {} available",
                HEADER_LEN,
                data.len()
            ),
        });
    }

    let length_bytes: [u8; LENGTH_LEN] = data[..LENGTH_LEN].try_into().expect("slice length fixed");
    let stored_length_crc = u32::from_le_bytes(
        data[LENGTH_LEN..HEADER_LEN]
            .try_into()
            .expect("slice length fixed"),
    );

    // The length checksum is validated before the length is trusted, so
    // a corrupted length field cannot cause a bogus payload read.
    let computed_length_crc = masked_crc32(&length_bytes);
    if computed_length_crc != stored_length_crc {
        return Err(TfRecordError::ChecksumMismatch {
            section: ChecksumSection::Length,
            offset: LENGTH_LEN as u64,
            stored: stored_length_crc,
            computed: computed_length_crc,
        });
    }

    let payload_len = u64::from_le_bytes(length_bytes);
    let available = data.len().saturating_sub(FRAME_OVERHEAD) as u64;
    if data.len() < FRAME_OVERHEAD || payload_len > available {
        return Err(TfRecordError::Truncated {
            offset: HEADER_LEN as u64,
            reason: format!(
                "frame declares {} payload bytes, {} available",
                payload_len,
                data.len().saturating_sub(FRAME_OVERHEAD)
            ),
        });
    }
    let payload_len = payload_len as usize;

    let payload = &data[HEADER_LEN..HEADER_LEN + payload_len];
    let footer_offset = HEADER_LEN + payload_len;
    let stored_payload_crc = u32::from_le_bytes(
        data[footer_offset..footer_offset + FOOTER_LEN]
            .try_into()
            .expect("slice length fixed"),
    );

    let computed_payload_crc = masked_crc32(payload);
    if computed_payload_crc != stored_payload_crc {
        return Err(TfRecordError::ChecksumMismatch {
            section: ChecksumSection::Data,
            offset: footer_offset as u64,
            stored: stored_payload_crc,
            computed: computed_payload_crc,
        });
    }

    Ok((payload.to_vec(), footer_offset + FOOTER_LEN))
}
