//! tfrecord-sink - TFRecord framing with a row-to-bytes encoder
//!
//! Two pieces: the `tfrecord` module implements the wire format
//! (writer, reader, frame codec, masked CRC32C), and the `encoder`
//! module adapts structured rows to it by extracting one byte-array
//! field per row.

pub mod encoder;
pub mod tfrecord;
