//! Page schema and load-time validation.
//!
//! The schema is the single source of truth for field kinds, defaults, and
//! constraints. It is loaded once per session and immutable afterwards; an
//! invalid schema is an authoring error and is rejected before anything is
//! rendered.
//!
//! Schemas can be built in code with the `Section`/`Field` constructors or
//! parsed from the JSON page document the companion runtime ships
//! (`heading` / `section` / `toggle` / `slider` / `color` / `submit` items).
//! Both paths funnel through the same validation in [`Schema::load`].

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::data::field::{Field, FieldControl};

/// The 24-bit RGB domain accepted for color values.
pub const COLOR_MAX: u32 = 0xFF_FFFF;

/// Errors detected while loading a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two fields declare the same message key. The key is the sole
    /// addressing mechanism into the outgoing message, so this is fatal.
    #[error("duplicate message key '{key}'")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// A slider declares `min` greater than `max`.
    #[error("slider '{key}' has min {min} greater than max {max}")]
    InvalidRange {
        /// The offending key.
        key: String,
        /// Declared lower bound.
        min: i32,
        /// Declared upper bound.
        max: i32,
    },

    /// A slider default lies outside its own bounds.
    #[error("slider '{key}' default {default} lies outside [{min}, {max}]")]
    DefaultOutOfRange {
        /// The offending key.
        key: String,
        /// Declared default.
        default: i32,
        /// Declared lower bound.
        min: i32,
        /// Declared upper bound.
        max: i32,
    },

    /// A color default lies outside the 24-bit RGB domain.
    #[error("color '{key}' default {default:#x} exceeds the 24-bit domain")]
    ColorOutOfDomain {
        /// The offending key.
        key: String,
        /// Declared default.
        default: u32,
    },

    /// A color literal in the page document could not be parsed.
    #[error("color '{key}' default '{value}' is not a color literal")]
    BadColorLiteral {
        /// The offending key.
        key: String,
        /// The literal as written.
        value: String,
    },

    /// A section item in the page document contains a nested section.
    #[error("section items may not nest further sections")]
    NestedSection,

    /// The page document itself is malformed JSON.
    #[error("malformed page document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Ordered group of fields with an optional heading.
///
/// Grouping is purely presentational and does not affect encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Heading rendered above the group, if any.
    pub heading: Option<String>,
    /// Fields in declared order.
    pub fields: Vec<Field>,
}

impl Section {
    /// Creates an empty section without a heading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty section with a heading.
    pub fn titled(heading: impl Into<String>) -> Self {
        Section {
            heading: Some(heading.into()),
            fields: Vec::new(),
        }
    }

    /// Appends a field to the section.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Top-level settings page description.
///
/// Loaded once per session via [`Schema::load`] or [`Schema::from_json`]
/// and treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Page heading rendered above all sections.
    pub heading: String,
    /// Label of the submit action.
    pub submit_label: String,
    /// Sections in declared order.
    pub sections: Vec<Section>,
}

impl Schema {
    /// Validates and assembles a schema.
    ///
    /// This is the sole validating constructor; every loading path ends
    /// here.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate message key, a slider with `min > max` or a
    /// default outside `[min, max]`, or a color default beyond 24 bits.
    pub fn load(
        heading: impl Into<String>,
        submit_label: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, SchemaError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for field in sections.iter().flat_map(|s| s.fields.iter()) {
            if !seen.insert(&field.key) {
                return Err(SchemaError::DuplicateKey {
                    key: field.key.clone(),
                });
            }
            match field.control {
                FieldControl::Toggle { .. } => {}
                FieldControl::Slider { default, min, max } => {
                    if min > max {
                        return Err(SchemaError::InvalidRange {
                            key: field.key.clone(),
                            min,
                            max,
                        });
                    }
                    if default < min || default > max {
                        return Err(SchemaError::DefaultOutOfRange {
                            key: field.key.clone(),
                            default,
                            min,
                            max,
                        });
                    }
                }
                FieldControl::Color { default } => {
                    if default > COLOR_MAX {
                        return Err(SchemaError::ColorOutOfDomain {
                            key: field.key.clone(),
                            default,
                        });
                    }
                }
            }
        }

        Ok(Schema {
            heading: heading.into(),
            submit_label: submit_label.into(),
            sections,
        })
    }

    /// Parses a JSON page document and validates the result.
    ///
    /// The document is an array of typed items: an optional `heading` for
    /// the page, `section` items whose `items` carry an optional heading
    /// and the fields, bare field items (collected into an implicit
    /// section), and an optional `submit` item carrying the button label.
    /// Color defaults may be written as numbers or `"0xRRGGBB"` literals.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, unparseable color literals, nested
    /// sections, or any of the [`Schema::load`] validation errors.
    pub fn from_json(document: &str) -> Result<Self, SchemaError> {
        let items: Vec<RawItem> = serde_json::from_str(document)?;

        let mut heading: Option<String> = None;
        let mut submit_label: Option<String> = None;
        let mut sections: Vec<Section> = Vec::new();
        let mut implicit = Section::new();

        for item in items {
            match item {
                RawItem::Heading { default_value } => {
                    heading.get_or_insert(default_value);
                }
                RawItem::Submit { default_value } => {
                    submit_label.get_or_insert(default_value);
                }
                RawItem::Section { items } => {
                    if !implicit.fields.is_empty() {
                        sections.push(std::mem::take(&mut implicit));
                    }
                    sections.push(parse_section(items)?);
                }
                field_item => implicit.fields.push(parse_field(field_item)?),
            }
        }
        if !implicit.fields.is_empty() {
            sections.push(implicit);
        }

        Schema::load(
            heading.unwrap_or_else(|| "Settings".to_string()),
            submit_label.unwrap_or_else(|| "Save Settings".to_string()),
            sections,
        )
    }

    /// Iterates every field across all sections, in declared order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Looks up a field by message key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields().find(|f| f.key == key)
    }

    /// Number of fields across all sections.
    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// Builds the key table for this schema, ids in declaration order.
    ///
    /// The host side generates its key constants from the same order, so
    /// reordering fields is a host-contract change.
    pub fn key_table(&self) -> appdict::KeyTable {
        appdict::KeyTable::from_keys(self.fields().map(|f| f.key.as_str()))
    }
}

/// Items of the JSON page document.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawItem {
    Heading {
        #[serde(rename = "defaultValue")]
        default_value: String,
    },
    Section {
        items: Vec<RawItem>,
    },
    Toggle {
        #[serde(rename = "messageKey")]
        message_key: String,
        label: String,
        #[serde(rename = "defaultValue")]
        default_value: bool,
    },
    Slider {
        #[serde(rename = "messageKey")]
        message_key: String,
        label: String,
        #[serde(rename = "defaultValue")]
        default_value: i32,
        min: i32,
        max: i32,
    },
    Color {
        #[serde(rename = "messageKey")]
        message_key: String,
        label: String,
        #[serde(rename = "defaultValue")]
        default_value: RawColor,
    },
    Submit {
        #[serde(rename = "defaultValue")]
        default_value: String,
    },
}

/// Color defaults appear either as numbers or as `"0xRRGGBB"` literals.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Number(u32),
    Literal(String),
}

fn parse_section(items: Vec<RawItem>) -> Result<Section, SchemaError> {
    let mut section = Section::new();
    for item in items {
        match item {
            RawItem::Heading { default_value } => {
                section.heading.get_or_insert(default_value);
            }
            RawItem::Section { .. } => return Err(SchemaError::NestedSection),
            // A submit item inside a section carries no field; ignore it
            // like the page renderer would.
            RawItem::Submit { .. } => {}
            field_item => section.fields.push(parse_field(field_item)?),
        }
    }
    Ok(section)
}

fn parse_field(item: RawItem) -> Result<Field, SchemaError> {
    match item {
        RawItem::Toggle {
            message_key,
            label,
            default_value,
        } => Ok(Field::toggle(message_key, label, default_value)),
        RawItem::Slider {
            message_key,
            label,
            default_value,
            min,
            max,
        } => Ok(Field::slider(message_key, label, default_value, min, max)),
        RawItem::Color {
            message_key,
            label,
            default_value,
        } => {
            let default = parse_color(&message_key, default_value)?;
            Ok(Field::color(message_key, label, default))
        }
        // Heading, Section and Submit are handled by the callers.
        _ => unreachable!("non-field item passed to parse_field"),
    }
}

fn parse_color(key: &str, raw: RawColor) -> Result<u32, SchemaError> {
    match raw {
        RawColor::Number(n) => Ok(n),
        RawColor::Literal(s) => {
            let digits = s
                .strip_prefix("0x")
                .or_else(|| s.strip_prefix("0X"))
                .or_else(|| s.strip_prefix('#'))
                .unwrap_or(&s);
            u32::from_str_radix(digits, 16).map_err(|_| SchemaError::BadColorLiteral {
                key: key.to_string(),
                value: s.clone(),
            })
        }
    }
}
