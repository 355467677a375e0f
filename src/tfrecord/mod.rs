//! TFRecord framing subsystem
//!
//! Implements the TFRecord self-framing binary container format: each
//! record is an opaque byte sequence wrapped in a length field, a
//! masked CRC32C of that length, the payload, and a masked CRC32C of
//! the payload. Frames concatenate with no separators and each one is
//! independently decodable from its start offset.
//!
//! # Design Principles
//!
//! - Bit-exact wire compatibility over convenience
//! - Explicit failure over silent recovery
//! - Caller-owned sinks and sources, no lifecycle management here
//!
//! The writer adds no retry, buffering, or fsync policy; the reader
//! halts on the first checksum mismatch or truncated frame.

mod checksum;
mod errors;
mod frame;
mod reader;
mod writer;

pub use checksum::{compute_checksum, mask, masked_crc32, verify_masked, MASK_DELTA};
pub use errors::{ChecksumSection, TfRecordError, TfRecordResult};
pub use frame::{decode_frame, encode_frame, FOOTER_LEN, FRAME_OVERHEAD, HEADER_LEN, LENGTH_LEN};
pub use reader::TfRecordReader;
pub use writer::TfRecordWriter;
