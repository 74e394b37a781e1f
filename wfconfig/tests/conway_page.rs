//! End-to-end pipeline coverage for a real settings page: the JSON page
//! document through schema load, default population, encoding, and wire
//! serialization.

use appdict::TupleValue;
use wfconfig::data::schema::Schema;
use wfconfig::data::session::SessionData;
use wfconfig::data::values::{FieldValue, ValueSet};
use wfconfig::encode::encode;

const CONWAY_PAGE: &str = r#"[
  {
    "type": "heading",
    "defaultValue": "App Configuration"
  },
  {
    "type": "section",
    "items": [
      {
        "type": "heading",
        "defaultValue": "Game Settings"
      },
      {
        "type": "toggle",
        "messageKey": "EdgeWrap",
        "label": "Wrap around edges",
        "defaultValue": true
      },
      {
        "type": "slider",
        "messageKey": "CellSize",
        "label": "Cell size",
        "defaultValue": 5,
        "min": 3,
        "max": 20
      },
      {
        "type": "slider",
        "messageKey": "FPS",
        "label": "FPS",
        "defaultValue": 12,
        "min": 1,
        "max": 60
      }
    ]
  },
  {
    "type": "section",
    "items": [
      {
        "type": "heading",
        "defaultValue": "Colors"
      },
      {
        "type": "color",
        "messageKey": "FGColor",
        "label": "Foreground color",
        "defaultValue": "0x000000"
      },
      {
        "type": "color",
        "messageKey": "BGColor",
        "label": "Background color",
        "defaultValue": "0xFFFFFF"
      }
    ]
  },
  {
    "type": "submit",
    "defaultValue": "Save Settings"
  }
]"#;

fn load_page() -> Schema {
    Schema::from_json(CONWAY_PAGE).expect("Page document should load")
}

#[test]
fn test_page_document_loads() {
    let schema = load_page();
    assert_eq!(schema.heading, "App Configuration");
    assert_eq!(schema.submit_label, "Save Settings");

    let keys: Vec<&str> = schema.fields().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["EdgeWrap", "CellSize", "FPS", "FGColor", "BGColor"]);

    let headings: Vec<Option<&str>> = schema
        .sections
        .iter()
        .map(|s| s.heading.as_deref())
        .collect();
    assert_eq!(headings, [Some("Game Settings"), Some("Colors")]);
}

#[test]
fn test_defaults_encode_in_schema_order() {
    let schema = load_page();
    let values = ValueSet::from_defaults(&schema);
    let message = encode(&schema, &values).expect("Encoding should succeed");

    let entries: Vec<(&str, &TupleValue)> = message
        .iter()
        .map(|e| (e.key.as_str(), &e.value))
        .collect();
    assert_eq!(
        entries,
        [
            ("EdgeWrap", &TupleValue::Int(1)),
            ("CellSize", &TupleValue::Int(5)),
            ("FPS", &TupleValue::Int(12)),
            ("FGColor", &TupleValue::Int(0x000000)),
            ("BGColor", &TupleValue::Int(0xFFFFFF)),
        ]
    );
}

#[test]
fn test_wire_bytes_match_host_inbox_format() {
    let schema = load_page();
    let values = ValueSet::from_defaults(&schema);
    let message = encode(&schema, &values).expect("Encoding should succeed");

    let bytes = message
        .to_bytes(&schema.key_table())
        .expect("Serialization should succeed");
    assert_eq!(
        bytes,
        [
            5, // tuple count
            0, 0, 0, 0, 3, 4, 0, 1, 0, 0, 0, // EdgeWrap = 1
            1, 0, 0, 0, 3, 4, 0, 5, 0, 0, 0, // CellSize = 5
            2, 0, 0, 0, 3, 4, 0, 12, 0, 0, 0, // FPS = 12
            3, 0, 0, 0, 3, 4, 0, 0, 0, 0, 0, // FGColor = 0x000000
            4, 0, 0, 0, 3, 4, 0, 0xFF, 0xFF, 0xFF, 0, // BGColor = 0xFFFFFF
        ]
    );
}

#[test]
fn test_host_values_override_defaults_where_present() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut initial = ValueSet::new();
    initial.set("EdgeWrap", FieldValue::Bool(false));
    initial.set("FPS", FieldValue::Int(30));
    // CellSize and the colors are absent: declared defaults apply.

    let session = SessionData::new(load_page(), &initial);
    assert_eq!(session.values.get("EdgeWrap"), Some(FieldValue::Bool(false)));
    assert_eq!(session.values.get("FPS"), Some(FieldValue::Int(30)));
    assert_eq!(session.values.get("CellSize"), Some(FieldValue::Int(5)));
    assert_eq!(
        session.values.get("BGColor"),
        Some(FieldValue::Color(0xFFFFFF))
    );
}

#[test]
fn test_out_of_range_edit_is_clamped_in_the_message() {
    let schema = load_page();
    let mut values = ValueSet::from_defaults(&schema);
    values.set("CellSize", FieldValue::Int(25));
    values.set("FPS", FieldValue::Int(0));

    let message = encode(&schema, &values).expect("Encoding should succeed");
    assert_eq!(message.get("CellSize"), Some(&TupleValue::Int(20)));
    assert_eq!(message.get("FPS"), Some(&TupleValue::Int(1)));
}

#[test]
fn test_rejected_submission_produces_no_message() {
    let schema = load_page();
    let mut values = ValueSet::from_defaults(&schema);
    values.set("FGColor", FieldValue::Color(0x1_000_000));

    assert!(encode(&schema, &values).is_err());
}
