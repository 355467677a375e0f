//! Masked CRC32C checksum computation for TFRecord frames
//!
//! Every frame carries two checksums:
//! - One over the 8-byte length encoding
//! - One over the payload bytes
//!
//! Both use CRC32C (Castagnoli polynomial, the variant the TFRecord
//! format specifies) passed through the TFRecord mask transform. The
//! polynomial and the mask are part of the wire format and must be
//! bit-exact for interoperability with other TFRecord implementations.

/// Constant added after the rotate step of the mask transform.
pub const MASK_DELTA: u32 = 0xa282_ead8;

/// Computes a raw CRC32C checksum over the provided data.
///
/// This function is deterministic: the same input always produces the
/// same output.
pub fn compute_checksum(data: &[u8]) -> u32 {
    crc32c::crc32c(data)
}

/// Applies the TFRecord mask transform to a raw CRC32C value.
///
/// `mask(crc) = ((crc >> 15) | (crc << 17)) + 0xa282ead8`, all
/// arithmetic modulo 2^32. The rotate-and-add keeps masked values from
/// colliding with raw CRC values stored by generic CRC-based formats.
pub fn mask(crc: u32) -> u32 {
    ((crc >> 15) | (crc << 17)).wrapping_add(MASK_DELTA)
}

/// Computes the masked CRC32C checksum of `data`.
///
/// This is the value stored on the wire for both the length and the
/// payload checksum fields.
pub fn masked_crc32(data: &[u8]) -> u32 {
    mask(compute_checksum(data))
}

/// Verifies that the masked checksum of `data` matches `expected`.
pub fn verify_masked(data: &[u8], expected: u32) -> bool {
    masked_crc32(data) == expected
}
