//! Ordered dictionary construction and wire serialization.
//!
//! A [`Dictionary`] is an ordered mapping from message key to [`TupleValue`].
//! Entry order is the order of first insertion and is preserved through
//! serialization, so a sender iterating its schema produces a message whose
//! tuples arrive in schema order.
//!
//! The wire form is the compact framing the receiving runtime's inbox
//! parser expects: a `u8` tuple count, then for each tuple a `u32` key id
//! (little-endian), a `u8` type code, a `u16` payload length
//! (little-endian), and the payload bytes. Keys travel as numeric ids
//! resolved through a [`KeyTable`].

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{DictError, Result};
use crate::value::TupleValue;

/// One key-value pair in a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Message key addressing a slot on the receiving runtime.
    pub key: String,
    /// Typed payload for that slot.
    pub value: TupleValue,
}

/// Ordered mapping from message key to typed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for `key`.
    ///
    /// If the key is already present its value is replaced in place, keeping
    /// the position of the first insertion; otherwise the entry is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: TupleValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(Entry { key, value }),
        }
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&TupleValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the dictionary into `writer` using `table` to resolve
    /// key ids.
    ///
    /// # Errors
    ///
    /// Fails if an entry's key is missing from the table, if the entry
    /// count or a payload length exceeds its wire field, or on I/O errors.
    pub fn write_to<W: Write>(&self, writer: &mut W, table: &KeyTable) -> Result<()> {
        let count = self.entries.len();
        if count > u8::MAX as usize {
            return Err(DictError::TooManyEntries { count });
        }
        writer.write_u8(count as u8)?;

        for entry in &self.entries {
            let id = table.id(&entry.key).ok_or_else(|| DictError::UnknownKey {
                key: entry.key.clone(),
            })?;
            let len = entry.value.payload_len();
            if len > u16::MAX as usize {
                return Err(DictError::PayloadTooLarge {
                    key: entry.key.clone(),
                    len,
                });
            }
            writer.write_u32::<LittleEndian>(id)?;
            writer.write_u8(entry.value.type_code())?;
            writer.write_u16::<LittleEndian>(len as u16)?;
            entry.value.write_payload(writer)?;
        }
        Ok(())
    }

    /// Serializes the dictionary into a byte vector.
    ///
    /// # Errors
    ///
    /// See [`Dictionary::write_to`].
    pub fn to_bytes(&self, table: &KeyTable) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, table)?;
        Ok(buf)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Assignment of numeric ids to message keys.
///
/// Ids are assigned sequentially from declaration order, the same order the
/// receiving runtime's build assigns its key constants. Both sides must be
/// generated from the same key list for slots to line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    names: Vec<String>,
}

impl KeyTable {
    /// Builds a table from keys in declaration order.
    ///
    /// The first occurrence of a key fixes its id; repeats are ignored.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if !names.contains(&key) {
                names.push(key);
            }
        }
        Self { names }
    }

    /// Returns the id assigned to `key`, if the key is in the table.
    pub fn id(&self, key: &str) -> Option<u32> {
        self.names.iter().position(|n| n == key).map(|i| i as u32)
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
