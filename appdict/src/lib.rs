//! # appdict - Typed Dictionary Messages
//!
//! A Rust library for building the compact typed key-value dictionary
//! messages consumed by constrained app runtimes.
//!
//! ## Features
//!
//! - Ordered dictionary construction with replace-in-place insertion
//! - Closed set of slot types: int32, uint32, C string, byte array
//! - Declaration-order key tables matching generated key constants
//! - Compact little-endian wire serialization with fixed-width framing
//!
//! ## Quick Start
//!
//! ```rust
//! use appdict::{Dictionary, KeyTable, TupleValue};
//!
//! // Key ids are assigned from declaration order, matching the
//! // constants generated for the receiving runtime.
//! let table = KeyTable::from_keys(["EdgeWrap", "FPS"]);
//!
//! let mut dict = Dictionary::new();
//! dict.insert("EdgeWrap", TupleValue::Int(1));
//! dict.insert("FPS", TupleValue::Int(12));
//!
//! let bytes = dict.to_bytes(&table).unwrap();
//! assert_eq!(bytes[0], 2); // tuple count
//! ```
//!
//! ## Modules
//!
//! - [`dict`] - Dictionary, key table, and wire serialization
//! - [`value`] - Tuple value types and payload encoding
//! - [`error`] - Error types and result definitions

/// Ordered dictionary construction and wire serialization.
pub mod dict;

/// Error types and result definitions for dictionary operations.
pub mod error;

/// Tuple value types and payload encoding.
pub mod value;

// Re-export main types for convenience
pub use dict::{Dictionary, Entry, KeyTable};
pub use error::{DictError, Result};
pub use value::TupleValue;

/// Current version of the appdict implementation
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
