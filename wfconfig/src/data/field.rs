//! Individual field descriptions.

use crate::data::values::FieldValue;

/// A single configurable setting.
///
/// The key is the stable identifier shared with the host device's state
/// slots; renaming it is a host-contract change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Message key, unique across the schema.
    pub key: String,
    /// Label shown next to the control.
    pub label: String,
    /// Control kind with its kind-specific constraints.
    pub control: FieldControl,
}

/// Supported control kinds for fields.
///
/// The set is closed; dispatch is by `match` since no kinds are added at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    /// Binary switch.
    Toggle {
        /// Initial state when the host supplies no value.
        default: bool,
    },
    /// Bounded integer slider. The widget enforces `min..=max` during
    /// interaction; the encoder clamps values arriving from outside.
    Slider {
        /// Initial value when the host supplies no value.
        default: i32,
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },
    /// 24-bit RGB color picker.
    Color {
        /// Initial color when the host supplies no value.
        default: u32,
    },
}

impl Field {
    /// Creates a toggle field.
    pub fn toggle(key: impl Into<String>, label: impl Into<String>, default: bool) -> Self {
        Field {
            key: key.into(),
            label: label.into(),
            control: FieldControl::Toggle { default },
        }
    }

    /// Creates a slider field with inclusive bounds.
    pub fn slider(
        key: impl Into<String>,
        label: impl Into<String>,
        default: i32,
        min: i32,
        max: i32,
    ) -> Self {
        Field {
            key: key.into(),
            label: label.into(),
            control: FieldControl::Slider { default, min, max },
        }
    }

    /// Creates a color field.
    pub fn color(key: impl Into<String>, label: impl Into<String>, default: u32) -> Self {
        Field {
            key: key.into(),
            label: label.into(),
            control: FieldControl::Color { default },
        }
    }

    /// The field's declared default as a session value.
    pub fn default_value(&self) -> FieldValue {
        match self.control {
            FieldControl::Toggle { default } => FieldValue::Bool(default),
            FieldControl::Slider { default, .. } => FieldValue::Int(default),
            FieldControl::Color { default } => FieldValue::Color(default),
        }
    }

    /// Whether `value` is of this field's kind.
    ///
    /// Kind compatibility only; range checks belong to the encoder.
    pub fn accepts(&self, value: FieldValue) -> bool {
        matches!(
            (&self.control, value),
            (FieldControl::Toggle { .. }, FieldValue::Bool(_))
                | (FieldControl::Slider { .. }, FieldValue::Int(_))
                | (FieldControl::Color { .. }, FieldValue::Color(_))
        )
    }
}

impl FieldControl {
    /// Human-readable kind name, used in validation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldControl::Toggle { .. } => "boolean",
            FieldControl::Slider { .. } => "integer",
            FieldControl::Color { .. } => "24-bit color",
        }
    }
}
