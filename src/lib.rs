//! Field value widgets for tabular import and export
//!
//! A widget converts one field's value between the text found in an
//! interchange file such as CSV and the typed value held by an in-memory
//! record. See [`widget::Widget`] for the conversion contract.

pub mod cli;
pub mod error;
pub mod schema;
pub mod value;
pub mod widget;

// Re-export commonly used types
pub use error::{FormatError, WidgetError, WidgetResult};
pub use schema::{FieldSpec, Record, Schema};
pub use value::Value;
pub use widget::{
    BooleanWidget, CharWidget, DateWidget, GenericWidget, IntegerWidget, Widget, WidgetKind,
    DEFAULT_DATE_FORMAT,
};
