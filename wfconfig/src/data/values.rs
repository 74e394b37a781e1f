//! Field values and the session value store.

use std::collections::HashMap;

use crate::data::schema::Schema;

/// A current value held for one field during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// Boolean value of a toggle.
    Bool(bool),
    /// Integer value of a slider.
    Int(i32),
    /// 24-bit RGB value of a color picker.
    Color(u32),
}

impl FieldValue {
    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_int(self) -> Option<i32> {
        match self {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the color payload, if this is a `Color`.
    pub fn as_color(self) -> Option<u32> {
        match self {
            FieldValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Human-readable kind name, used in validation messages.
    pub fn kind_name(self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "boolean",
            FieldValue::Int(_) => "integer",
            FieldValue::Color(_) => "color",
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Color(c) => write!(f, "{c:#08x}"),
        }
    }
}

/// Mapping from message key to current value for one editing session.
///
/// The store itself is unordered; iteration order is always imposed by the
/// schema, which is the single source of field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    values: HashMap<String, FieldValue>,
}

impl ValueSet {
    /// Creates an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value set holding every field's declared default.
    pub fn from_defaults(schema: &Schema) -> Self {
        let mut set = Self::new();
        for field in schema.fields() {
            set.set(field.key.clone(), field.default_value());
        }
        set
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<FieldValue> {
        self.values.get(key).copied()
    }

    /// Stores a value for `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        self.values.insert(key.into(), value);
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
