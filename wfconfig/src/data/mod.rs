//! Settings data structures and schema loading.
//!
//! This module provides the core data structures for a settings session:
//!
//! - Schema loading and load-time validation
//! - Field descriptions with kind-specific constraints
//! - The session value store and session state container
//!
//! ## Architecture
//!
//! The data module is organized into several submodules:
//!
//! - [`field`] - Individual field descriptions
//! - [`schema`] - Page schema and load-time validation
//! - [`session`] - Per-session state container
//! - [`values`] - Field values and the session value store

/// Individual field descriptions.
pub mod field;

/// Page schema and load-time validation.
pub mod schema;

/// Per-session state container.
pub mod session;

/// Field values and the session value store.
pub mod values;

pub use schema::Schema;
