//! Error types and result definitions for dictionary operations.

use thiserror::Error;

/// Errors raised while building or serializing a dictionary.
#[derive(Debug, Error)]
pub enum DictError {
    /// A dictionary entry's key has no id in the key table.
    ///
    /// Key ids are part of the contract with the receiving runtime, so a
    /// key outside the table cannot be serialized.
    #[error("key '{key}' is not present in the key table")]
    UnknownKey {
        /// The offending message key.
        key: String,
    },

    /// The dictionary holds more entries than the wire format can count.
    #[error("dictionary has {count} entries, the wire format allows at most 255")]
    TooManyEntries {
        /// Number of entries in the dictionary.
        count: usize,
    },

    /// A tuple payload exceeds the 16-bit length field.
    #[error("payload for key '{key}' is {len} bytes, the wire format allows at most 65535")]
    PayloadTooLarge {
        /// The offending message key.
        key: String,
        /// Payload length in bytes.
        len: usize,
    },

    /// Underlying I/O failure while writing the serialized form.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, DictError>;
