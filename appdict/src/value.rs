//! Tuple value types carried by dictionary entries.
//!
//! Each entry in a dictionary holds one [`TupleValue`]. The set of variants
//! is closed: it matches exactly the slot types the receiving runtime's
//! dictionary parser understands.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::Result;

/// Typed payload for one dictionary tuple.
///
/// Integer variants occupy a fixed-width 32-bit slot; strings are
/// NUL-terminated; byte arrays are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TupleValue {
    /// Raw byte-array slot.
    Bytes(Vec<u8>),
    /// NUL-terminated string slot.
    CString(String),
    /// Unsigned 32-bit integer slot.
    Uint(u32),
    /// Signed 32-bit integer slot.
    Int(i32),
}

impl TupleValue {
    /// Wire type code for this value.
    pub fn type_code(&self) -> u8 {
        match self {
            TupleValue::Bytes(_) => 0,
            TupleValue::CString(_) => 1,
            TupleValue::Uint(_) => 2,
            TupleValue::Int(_) => 3,
        }
    }

    /// Serialized payload length in bytes.
    pub fn payload_len(&self) -> usize {
        match self {
            TupleValue::Bytes(b) => b.len(),
            TupleValue::CString(s) => s.len() + 1,
            TupleValue::Uint(_) | TupleValue::Int(_) => 4,
        }
    }

    /// Writes the payload bytes in wire order (integers little-endian).
    pub fn write_payload<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            TupleValue::Bytes(b) => writer.write_all(b)?,
            TupleValue::CString(s) => {
                writer.write_all(s.as_bytes())?;
                writer.write_u8(0)?;
            }
            TupleValue::Uint(v) => writer.write_u32::<LittleEndian>(*v)?,
            TupleValue::Int(v) => writer.write_i32::<LittleEndian>(*v)?,
        }
        Ok(())
    }

    /// Returns the signed integer payload, if this is an `Int` slot.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TupleValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the unsigned integer payload, if this is a `Uint` slot.
    pub fn as_uint(&self) -> Option<u32> {
        match self {
            TupleValue::Uint(v) => Some(*v),
            _ => None,
        }
    }
}
