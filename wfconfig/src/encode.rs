//! Validation and message encoding.
//!
//! On submission the working value set is validated against the schema and
//! encoded into the typed dictionary message the host device consumes.
//! Validation is synchronous, pure, and all-or-nothing: any failure aborts
//! the whole message, since partial application of settings on the host is
//! not allowed.
//!
//! Slot types are a fixed host contract: toggles travel as int32 `0`/`1`,
//! sliders as int32, colors as their 24-bit value in an int32 slot.

use appdict::{Dictionary, TupleValue};
use thiserror::Error;

use crate::data::field::FieldControl;
use crate::data::schema::{COLOR_MAX, Schema};
use crate::data::values::{FieldValue, ValueSet};

/// Errors raised while validating and encoding a submission.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value set has no entry for a schema field.
    ///
    /// The renderer guarantees completeness, so this indicates a caller
    /// bug, not user error.
    #[error("no value for message key '{key}'")]
    MissingValue {
        /// The uncovered key.
        key: String,
    },

    /// A value does not fit its field's kind or domain.
    #[error("value for '{key}' expected {expected}, got {actual}")]
    TypeMismatch {
        /// The offending key.
        key: String,
        /// What the field's kind requires.
        expected: String,
        /// What the value set held.
        actual: String,
    },
}

/// Validates `values` against `schema` and encodes the outgoing message.
///
/// The message holds exactly one entry per schema field, in schema order.
/// Out-of-range slider values are clamped to the nearest bound (and
/// logged); toggle and color domain violations abort the whole message.
///
/// # Errors
///
/// Returns [`EncodeError::MissingValue`] when a field has no value and
/// [`EncodeError::TypeMismatch`] for wrong-kind or out-of-domain values.
pub fn encode(schema: &Schema, values: &ValueSet) -> Result<Dictionary, EncodeError> {
    let mut dict = Dictionary::new();

    for field in schema.fields() {
        let value = values.get(&field.key).ok_or_else(|| EncodeError::MissingValue {
            key: field.key.clone(),
        })?;

        let slot = match (&field.control, value) {
            (FieldControl::Toggle { .. }, FieldValue::Bool(b)) => TupleValue::Int(b as i32),
            (FieldControl::Slider { min, max, .. }, FieldValue::Int(i)) => {
                let clamped = i.clamp(*min, *max);
                if clamped != i {
                    warn!(
                        "clamped '{}' from {} to {} (range {}..={})",
                        field.key, i, clamped, min, max
                    );
                }
                TupleValue::Int(clamped)
            }
            (FieldControl::Color { .. }, FieldValue::Color(c)) if c <= COLOR_MAX => {
                TupleValue::Int(c as i32)
            }
            (control, value) => {
                return Err(EncodeError::TypeMismatch {
                    key: field.key.clone(),
                    expected: control.kind_name().to_string(),
                    actual: value.to_string(),
                });
            }
        };
        dict.insert(field.key.clone(), slot);
    }

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::field::Field;
    use crate::data::schema::Section;

    fn schema() -> Schema {
        Schema::load(
            "App Configuration",
            "Save Settings",
            vec![
                Section::titled("Game Settings")
                    .with_field(Field::toggle("EdgeWrap", "Wrap around edges", true))
                    .with_field(Field::slider("CellSize", "Cell size", 5, 3, 20)),
                Section::titled("Colors")
                    .with_field(Field::color("FGColor", "Foreground color", 0x000000)),
            ],
        )
        .expect("Schema should load")
    }

    #[test]
    fn test_defaults_encode_identically() {
        let values = ValueSet::from_defaults(&schema());
        let message = encode(&schema(), &values).expect("Encoding should succeed");

        let entries: Vec<(&str, &TupleValue)> = message
            .iter()
            .map(|e| (e.key.as_str(), &e.value))
            .collect();
        assert_eq!(
            entries,
            [
                ("EdgeWrap", &TupleValue::Int(1)),
                ("CellSize", &TupleValue::Int(5)),
                ("FGColor", &TupleValue::Int(0)),
            ],
            "One entry per field, in schema order, carrying the defaults"
        );
    }

    #[test]
    fn test_slider_clamps_to_nearest_bound() {
        let schema = schema();
        for (input, expected) in [(25, 20), (1, 3), (10, 10)] {
            let mut values = ValueSet::from_defaults(&schema);
            values.set("CellSize", FieldValue::Int(input));
            let message = encode(&schema, &values).expect("Encoding should succeed");
            assert_eq!(
                message.get("CellSize"),
                Some(&TupleValue::Int(expected)),
                "Input {input} should encode as {expected}"
            );
        }
    }

    #[test]
    fn test_missing_value_is_a_caller_bug() {
        let mut values = ValueSet::new();
        values.set("EdgeWrap", FieldValue::Bool(true));

        let err = encode(&schema(), &values).expect_err("Encoding should fail");
        assert!(matches!(err, EncodeError::MissingValue { key } if key == "CellSize"));
    }

    #[test]
    fn test_non_boolean_toggle_is_rejected() {
        let mut values = ValueSet::from_defaults(&schema());
        values.set("EdgeWrap", FieldValue::Int(1));

        let err = encode(&schema(), &values).expect_err("Encoding should fail");
        assert!(matches!(err, EncodeError::TypeMismatch { key, .. } if key == "EdgeWrap"));
    }

    #[test]
    fn test_out_of_domain_color_is_rejected() {
        let mut values = ValueSet::from_defaults(&schema());
        values.set("FGColor", FieldValue::Color(0x1_000_000));

        let err = encode(&schema(), &values).expect_err("Encoding should fail");
        assert!(matches!(err, EncodeError::TypeMismatch { key, .. } if key == "FGColor"));
    }

    #[test]
    fn test_failure_produces_no_partial_message() {
        // FGColor is last in schema order; a violation there must still
        // suppress the entries already encoded.
        let mut values = ValueSet::from_defaults(&schema());
        values.set("FGColor", FieldValue::Color(0xFFFF_FFFF));
        assert!(encode(&schema(), &values).is_err());
    }
}
