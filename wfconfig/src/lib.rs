//! # wfconfig
//!
//! A Cursive-based TUI settings form for companion configuration of watch
//! apps.
//!
//! wfconfig renders an interactive terminal form from a declarative page
//! schema, validates the edited values against each field's constraints,
//! and encodes them into the compact typed dictionary message the watch
//! runtime consumes (see the `appdict` crate).
//!
//! ## Features
//!
//! - Schema-driven form generation: toggle, slider, and color fields
//! - Load-time schema validation (duplicate keys, constraint checks)
//! - Sliders bounded by the widget, clamping for out-of-range host input
//! - All-or-nothing message encoding with fixed host slot types
//! - Schemas from JSON page documents or in-code construction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wfconfig::data::field::Field;
//! use wfconfig::data::schema::{Schema, Section};
//! use wfconfig::data::values::ValueSet;
//!
//! let schema = Schema::load(
//!     "App Configuration",
//!     "Save Settings",
//!     vec![
//!         Section::titled("Game Settings")
//!             .with_field(Field::toggle("EdgeWrap", "Wrap around edges", true))
//!             .with_field(Field::slider("CellSize", "Cell size", 5, 3, 20)),
//!     ],
//! )
//! .unwrap();
//! let key_table = schema.key_table();
//!
//! // Last-known values arrive from the host; absent keys use defaults.
//! let initial = ValueSet::new();
//!
//! if let Some(message) = wfconfig::run(schema, &initial).unwrap() {
//!     // Hand the serialized message to the transport.
//!     let bytes = message.to_bytes(&key_table).unwrap();
//!     assert!(!bytes.is_empty());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Settings data structures and schema loading
//! - [`encode`] - Validation and message encoding
//! - [`run`] - Form session driver
//! - [`ui`] - UI components and session event handlers

#[macro_use]
extern crate log;

/// Settings data structures and schema loading.
///
/// This module provides the core data structures for a settings session,
/// including schema validation, field values, and session state.
pub mod data;

/// Validation and message encoding.
pub mod encode;

/// Form session driver and main entry point.
pub mod run;

/// UI components and session event handlers.
pub mod ui;

pub use appdict;
pub use run::*;
