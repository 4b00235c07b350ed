//! Unit tests for the widget conversion contract
//!
//! Tests cover:
//! - clean/render of every widget through `dyn Widget`
//! - Empty and absent input handling
//! - Format errors for integers and dates
//! - Boolean token leniency

use assert_matches::assert_matches;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use widgetconv::{
    BooleanWidget, CharWidget, DateWidget, GenericWidget, IntegerWidget, Value, Widget,
    WidgetError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Callers hold widgets by field name, never by concrete type
fn field_widgets() -> HashMap<&'static str, Box<dyn Widget>> {
    let mut widgets: HashMap<&'static str, Box<dyn Widget>> = HashMap::new();
    widgets.insert("notes", Box::new(GenericWidget));
    widgets.insert("id", Box::new(IntegerWidget));
    widgets.insert("name", Box::new(CharWidget));
    widgets.insert("active", Box::new(BooleanWidget));
    widgets.insert("born", Box::new(DateWidget::new()));
    widgets
}

#[test]
fn test_import_row_through_field_mapping() {
    let widgets = field_widgets();
    let row = [
        ("notes", "free text"),
        ("id", "17"),
        ("name", "Alice"),
        ("active", "1"),
        ("born", "2021-03-05"),
    ];

    let cleaned: HashMap<&str, Value> = row
        .iter()
        .map(|(field, text)| (*field, widgets[field].clean(Some(*text)).unwrap()))
        .collect();

    assert_eq!(cleaned["notes"], Value::from("free text"));
    assert_eq!(cleaned["id"], Value::Integer(17));
    assert_eq!(cleaned["name"], Value::from("Alice"));
    assert_eq!(cleaned["active"], Value::Boolean(true));
    assert_eq!(cleaned["born"], Value::Date(date(2021, 3, 5)));
}

#[test]
fn test_export_row_through_field_mapping() {
    let widgets = field_widgets();
    let record = [
        ("id", Value::Integer(-3)),
        ("name", Value::from("Bob")),
        ("active", Value::Boolean(false)),
        ("born", Value::Date(date(1999, 12, 31))),
    ];

    let cells: Vec<String> = record
        .iter()
        .map(|(field, value)| widgets[field].render(value))
        .collect();

    assert_eq!(cells, vec!["-3", "Bob", "0", "1999-12-31"]);
}

#[test]
fn test_rendering_cleaned_values() {
    let widgets = field_widgets();
    for (field, text, expected) in [
        ("notes", "", ""),
        ("id", "", ""),
        ("id", "0", "0"),
        ("id", " 007 ", "7"),
        ("name", "x", "x"),
        ("active", "maybe", "0"),
        ("active", "1", "1"),
        ("born", "", ""),
        ("born", "2000-02-29", "2000-02-29"),
    ] {
        let widget = &widgets[field];
        let value = widget.clean(Some(text)).unwrap();
        assert_eq!(widget.render(&value), expected, "{} <- {:?}", field, text);
    }
}

#[test]
fn test_integer_clean_and_render() {
    assert_eq!(IntegerWidget.clean(Some("12")).unwrap(), Value::Integer(12));
    assert_eq!(IntegerWidget.clean(Some("")).unwrap(), Value::Null);
    assert_eq!(IntegerWidget.clean(None).unwrap(), Value::Null);
    assert_eq!(IntegerWidget.render(&Value::Integer(-40)), "-40");

    let err = IntegerWidget.clean(Some("12x")).unwrap_err();
    assert_matches!(err, WidgetError::Format(_));
    assert_eq!(err.as_format_error().unwrap().value, "12x");
}

#[test]
fn test_boolean_tokens() {
    assert_eq!(BooleanWidget.render(&Value::Boolean(true)), "1");
    assert_eq!(BooleanWidget.render(&Value::Boolean(false)), "0");
    assert_eq!(BooleanWidget.clean(Some("1")).unwrap(), Value::Boolean(true));
    assert_eq!(BooleanWidget.clean(Some("0")).unwrap(), Value::Boolean(false));
    assert_eq!(BooleanWidget.clean(Some("")).unwrap(), Value::Boolean(false));
    assert_eq!(BooleanWidget.clean(Some("yes")).unwrap(), Value::Boolean(false));
}

#[test]
fn test_date_default_format() {
    let widget = DateWidget::new();
    let value = widget.clean(Some("2021-03-05")).unwrap();
    assert_eq!(value.as_date(), Some(date(2021, 3, 5)));
    assert_eq!(widget.render(&value), "2021-03-05");

    assert_eq!(widget.clean(Some("")).unwrap(), Value::Null);
    assert_matches!(
        widget.clean(Some("not-a-date")),
        Err(WidgetError::Format(_))
    );
}

#[test]
fn test_date_custom_format_round_trip() {
    let widget = DateWidget::with_format("%d/%m/%Y").unwrap();
    let cleaned = widget.clean(Some("31/12/2020")).unwrap();
    assert_eq!(widget.render(&cleaned), "31/12/2020");

    // ISO text no longer matches
    assert!(widget.clean(Some("2020-12-31")).is_err());
}

#[test]
fn test_date_format_with_month_names() {
    let widget = DateWidget::with_format("%d %b %Y").unwrap();
    let cleaned = widget.clean(Some("05 Mar 2021")).unwrap();
    assert_eq!(cleaned, Value::Date(date(2021, 3, 5)));
    assert_eq!(widget.render(&cleaned), "05 Mar 2021");
}

#[test]
fn test_widgets_are_shareable_across_threads() {
    let widget: std::sync::Arc<dyn Widget> = std::sync::Arc::new(DateWidget::new());
    let handles: Vec<_> = (1..=4)
        .map(|day| {
            let widget = std::sync::Arc::clone(&widget);
            std::thread::spawn(move || {
                let text = format!("2021-01-0{}", day);
                let value = widget.clean(Some(text.as_str())).unwrap();
                widget.render(&value) == text
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
