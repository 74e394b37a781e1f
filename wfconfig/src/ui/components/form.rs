//! Form construction for a settings schema.
//!
//! Builds the cursive view tree for a page: section headings followed by
//! one row per field, in declared order. Each control writes its edits
//! into the session's working value set; nothing is committed until the
//! submit button fires.

use cursive::Cursive;
use cursive::theme::{Effect, Style};
use cursive::traits::{Nameable, Resizable};
use cursive::views::{
    Checkbox, Dialog, DummyView, LinearLayout, ScrollView, SelectView, SliderView, TextView,
};

use crate::data::field::{Field, FieldControl};
use crate::data::schema::Schema;
use crate::data::session::SessionData;
use crate::data::values::{FieldValue, ValueSet};
use crate::ui::handle_submit;

/// Colors offered by the picker.
///
/// The host display quantizes channels in 0x55 steps; these are the
/// palette entries watch faces actually use.
const PALETTE: &[(&str, u32)] = &[
    ("Black", 0x000000),
    ("White", 0xFFFFFF),
    ("Light Gray", 0xAAAAAA),
    ("Dark Gray", 0x555555),
    ("Red", 0xFF0000),
    ("Orange", 0xFF5500),
    ("Chrome Yellow", 0xFFAA00),
    ("Yellow", 0xFFFF00),
    ("Green", 0x00FF00),
    ("Dark Green", 0x005500),
    ("Cyan", 0x00FFFF),
    ("Blue", 0x0000FF),
    ("Duke Blue", 0x0000AA),
    ("Indigo", 0x5500FF),
    ("Purple", 0xAA00AA),
    ("Magenta", 0xFF00FF),
];

const LABEL_WIDTH: usize = 24;

/// Builds the full settings form for `schema`, prepopulated from the
/// session's working values.
pub fn form_view(schema: &Schema, values: &ValueSet) -> Dialog {
    let mut body = LinearLayout::vertical();
    let mut first = true;
    for section in &schema.sections {
        if !first {
            body.add_child(DummyView);
        }
        first = false;
        if let Some(heading) = &section.heading {
            body.add_child(TextView::new(heading.clone()).style(Style::from(Effect::Bold)));
        }
        for field in &section.fields {
            body.add_child(field_row(field, values));
        }
    }

    Dialog::around(ScrollView::new(body))
        .title(schema.heading.clone())
        .button(schema.submit_label.clone(), handle_submit)
}

fn field_row(field: &Field, values: &ValueSet) -> LinearLayout {
    let mut row = LinearLayout::horizontal();
    row.add_child(TextView::new(field.label.clone()).fixed_width(LABEL_WIDTH));

    match field.control {
        FieldControl::Toggle { default } => {
            let checked = values
                .get(&field.key)
                .and_then(FieldValue::as_bool)
                .unwrap_or(default);
            let key = field.key.clone();
            let mut checkbox = Checkbox::new();
            let _ = checkbox.set_checked(checked);
            row.add_child(checkbox.on_change(move |siv, checked| {
                set_value(siv, &key, FieldValue::Bool(checked));
            }));
        }
        FieldControl::Slider { default, min, max } => {
            // The widget only represents in-range positions; the working
            // value keeps whatever the host supplied and the encoder
            // clamps it at submission.
            let shown = values
                .get(&field.key)
                .and_then(FieldValue::as_int)
                .unwrap_or(default)
                .clamp(min, max);
            let steps = (max - min) as usize + 1;
            let key = field.key.clone();
            let readout = format!("{}.readout", field.key);
            row.add_child(
                SliderView::horizontal(steps)
                    .value((shown - min) as usize)
                    .on_change(move |siv, position| {
                        let value = min + position as i32;
                        set_value(siv, &key, FieldValue::Int(value));
                        siv.call_on_name(&readout, |v: &mut TextView| {
                            v.set_content(value.to_string());
                        });
                    }),
            );
            row.add_child(DummyView);
            row.add_child(
                TextView::new(shown.to_string()).with_name(format!("{}.readout", field.key)),
            );
        }
        FieldControl::Color { default } => {
            let current = values
                .get(&field.key)
                .and_then(FieldValue::as_color)
                .unwrap_or(default);
            let key = field.key.clone();
            let mut select = SelectView::<u32>::new().popup();
            let mut selected = None;
            for (i, (name, color)) in PALETTE.iter().enumerate() {
                select.add_item(*name, *color);
                if *color == current {
                    selected = Some(i);
                }
            }
            // A host-supplied color outside the palette must stay
            // representable, or the picker would rewrite it on open.
            let select = match selected {
                Some(i) => select.selected(i),
                None => {
                    select.add_item(format!("Custom (#{current:06X})"), current);
                    select.selected(PALETTE.len())
                }
            };
            row.add_child(select.on_submit(move |siv, color: &u32| {
                set_value(siv, &key, FieldValue::Color(*color));
            }));
        }
    }
    row
}

fn set_value(siv: &mut Cursive, key: &str, value: FieldValue) {
    siv.with_user_data(|s: &mut SessionData| s.set_value(key, value));
}
