//! Form session driver.
//!
//! Runs one settings session end to end: build the working state from the
//! host's last-known values, run the form, and encode on submit. Delivery
//! of the message is fire-and-forget and belongs to the transport layer;
//! this module only produces it.

pub use cursive;
use cursive::event::Key;
use cursive::{Cursive, CursiveExt};

use appdict::Dictionary;

use crate::data::schema::Schema;
use crate::data::session::SessionData;
use crate::data::values::ValueSet;
use crate::ui::{components::form::form_view, handle_cancel};

/// Runs one settings session for `schema`.
///
/// `initial` carries the host's last-known values; keys absent from it
/// fall back to the schema defaults. Returns `Ok(None)` when the user
/// dismisses the form without submitting (a normal terminal state, not an
/// error) and the encoded message after a successful submit.
///
/// # Errors
///
/// Returns an error when the encoder reports an incomplete working value
/// set, which indicates a bug in the form, not user input.
pub fn run(schema: Schema, initial: &ValueSet) -> anyhow::Result<Option<Dictionary>> {
    let session = SessionData::new(schema, initial);
    let view = form_view(&session.schema, &session.values);

    let mut siv = Cursive::default();
    siv.set_user_data(session);

    siv.add_global_callback('q', handle_cancel);
    siv.add_global_callback('Q', handle_cancel);
    siv.add_global_callback(Key::Esc, handle_cancel);
    siv.add_fullscreen_layer(view);

    siv.run();

    let session = siv.take_user_data::<SessionData>().unwrap();
    match session.submission {
        None => {
            info!("session dismissed, no message produced");
            Ok(None)
        }
        Some(Ok(message)) => Ok(Some(message)),
        Some(Err(err)) => Err(err.into()),
    }
}
