//! Per-session state container.
//!
//! One [`SessionData`] exists per settings session. It is created from the
//! host-supplied initial values at session start, stored as cursive user
//! data while the form is live, and consumed once when the session ends.

use appdict::Dictionary;

use crate::data::schema::Schema;
use crate::data::values::{FieldValue, ValueSet};
use crate::encode::EncodeError;

/// Mutable state for a single settings session.
pub struct SessionData {
    /// The immutable schema driving this session.
    pub schema: Schema,
    /// Working copy of field values, mutated by the form controls.
    pub values: ValueSet,
    /// Result of the submit action: `None` until (and unless) the user
    /// submits, then the encoded message or the encoder's fault.
    pub submission: Option<Result<Dictionary, EncodeError>>,
}

impl SessionData {
    /// Builds session state from the host's last-known values.
    ///
    /// Every schema field gets exactly one working value: the initial value
    /// when present and of the field's kind, otherwise the declared
    /// default. A kind mismatch in the initial set is a host-side anomaly
    /// and is logged, not surfaced.
    pub fn new(schema: Schema, initial: &ValueSet) -> Self {
        let mut values = ValueSet::new();
        for field in schema.fields() {
            let value = match initial.get(&field.key) {
                Some(v) if field.accepts(v) => v,
                Some(v) => {
                    warn!(
                        "initial value for '{}' is {}, expected {}; using default",
                        field.key,
                        v.kind_name(),
                        field.control.kind_name()
                    );
                    field.default_value()
                }
                None => {
                    debug!("no initial value for '{}', using default", field.key);
                    field.default_value()
                }
            };
            values.set(field.key.clone(), value);
        }

        SessionData {
            schema,
            values,
            submission: None,
        }
    }

    /// Updates one working value in response to a control edit.
    pub fn set_value(&mut self, key: &str, value: FieldValue) {
        self.values.set(key, value);
    }
}
