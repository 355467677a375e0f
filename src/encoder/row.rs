//! Minimal positional row model
//!
//! Rows are ordered field lists with no schema beyond the per-field
//! value type. The encoder only ever touches one field positionally, so
//! nothing here validates rows as a whole.

use super::errors::{EncodeError, EncodeResult};

/// A single row field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Opaque byte sequence, the only type the encoder accepts
    Bytes(Vec<u8>),
    /// UTF-8 text
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Floating point
    Float(f64),
    /// Boolean
    Boolean(bool),
    /// Absent value
    Null,
}

impl FieldValue {
    /// Returns the type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Null => "null",
        }
    }
}

/// An ordered collection of field values with positional access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    fields: Vec<FieldValue>,
}

impl Row {
    /// Creates a row from its field values.
    pub fn new(fields: Vec<FieldValue>) -> Self {
        Self { fields }
    }

    /// Returns the number of fields.
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`, or `None` if out of range.
    pub fn field(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index)
    }

    /// Returns the field at `index` as a byte slice.
    ///
    /// This is the typed accessor at the encoding boundary: it fails
    /// explicitly instead of relying on a dynamic cast.
    ///
    /// # Errors
    ///
    /// - `FieldOutOfRange` if `index` does not exist
    /// - `NullField` if the field is null
    /// - `FieldNotBytes` if the field holds any other value type
    pub fn bytes_at(&self, index: usize) -> EncodeResult<&[u8]> {
        match self.field(index) {
            None => Err(EncodeError::FieldOutOfRange {
                index,
                width: self.width(),
            }),
            Some(FieldValue::Bytes(bytes)) => Ok(bytes),
            Some(FieldValue::Null) => Err(EncodeError::NullField { index }),
            Some(other) => Err(EncodeError::FieldNotBytes {
                index,
                found: other.type_name(),
            }),
        }
    }
}

impl From<Vec<FieldValue>> for Row {
    fn from(fields: Vec<FieldValue>) -> Self {
        Self::new(fields)
    }
}
