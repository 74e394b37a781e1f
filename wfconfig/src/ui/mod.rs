//! UI components and session event handlers.
//!
//! The handlers operate on the [`SessionData`] stored as cursive user
//! data. They are wired up as the submit button action and the global
//! dismiss keys by the session driver in [`crate::run`].

/// Form construction for a settings schema.
pub mod components;

use cursive::Cursive;
use cursive::views::Dialog;

use crate::data::session::SessionData;
use crate::encode::{EncodeError, encode};

/// Submit action: validate and encode the working values.
///
/// A rejected value is shown to the user and leaves the session open for
/// correction; a successful encode stores the message and ends the
/// session. A missing working value is a bug in the form itself and ends
/// the session carrying the fault.
pub fn handle_submit(siv: &mut Cursive) {
    let result = siv
        .with_user_data(|s: &mut SessionData| encode(&s.schema, &s.values))
        .expect("session data not set");

    match result {
        Ok(message) => {
            info!("settings submitted, {} entries", message.len());
            siv.with_user_data(|s: &mut SessionData| s.submission = Some(Ok(message)));
            siv.quit();
        }
        Err(err @ EncodeError::TypeMismatch { .. }) => {
            warn!("submission rejected: {err}");
            siv.add_layer(Dialog::info(err.to_string()).title("Invalid value"));
        }
        Err(err) => {
            error!("form contract violation: {err}");
            siv.with_user_data(|s: &mut SessionData| s.submission = Some(Err(err)));
            siv.quit();
        }
    }
}

/// Dismiss action: close the top dialog, or end the session without a
/// message when the form is the only layer left.
pub fn handle_cancel(siv: &mut Cursive) {
    if siv.screen().len() > 1 {
        siv.pop_layer();
    } else {
        siv.quit();
    }
}
