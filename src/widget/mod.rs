//! Widgets convert field values between their export (text) and import
//! (typed) representations.
//!
//! Every widget exposes the same two operations:
//!
//! * [`Widget::clean`] turns external text into an internal [`Value`]
//! * [`Widget::render`] turns an internal [`Value`] into external text
//!
//! Widgets hold only immutable configuration, so a single instance can be
//! shared by every record of a field and across threads.

pub mod boolean;
pub mod date;
pub mod generic;
pub mod integer;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::value::Value;

pub use boolean::BooleanWidget;
pub use date::{DateWidget, DEFAULT_DATE_FORMAT};
pub use generic::{CharWidget, GenericWidget};
pub use integer::IntegerWidget;

/// Conversion between the export and import representation of a field value
pub trait Widget: fmt::Debug + Send + Sync {
    /// Name used in diagnostics and error messages
    fn name(&self) -> &'static str;

    /// Returns the internal value for an import value.
    ///
    /// `None` stands for an absent cell. The default implementation passes
    /// the text through unchanged.
    fn clean(&self, value: Option<&str>) -> WidgetResult<Value> {
        Ok(Value::from(value))
    }

    /// Returns the export representation of an internal value.
    fn render(&self, value: &Value) -> String {
        value.to_text()
    }
}

/// Registry of the available widget variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Generic,
    Integer,
    Char,
    Boolean,
    Date,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Generic,
        WidgetKind::Integer,
        WidgetKind::Char,
        WidgetKind::Boolean,
        WidgetKind::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Generic => "generic",
            WidgetKind::Integer => "integer",
            WidgetKind::Char => "char",
            WidgetKind::Boolean => "boolean",
            WidgetKind::Date => "date",
        }
    }

    /// Construct a widget of this kind.
    ///
    /// Only date widgets accept a format; passing one to any other kind is a
    /// configuration error.
    pub fn build(&self, format: Option<&str>) -> WidgetResult<Box<dyn Widget>> {
        if let Some(fmt) = format {
            if *self != WidgetKind::Date {
                return Err(WidgetError::configuration(format!(
                    "format '{}' given for {} widget, only date widgets take a format",
                    fmt,
                    self.as_str()
                )));
            }
        }

        let widget: Box<dyn Widget> = match self {
            WidgetKind::Generic => Box::new(GenericWidget),
            WidgetKind::Integer => Box::new(IntegerWidget),
            WidgetKind::Char => Box::new(CharWidget),
            WidgetKind::Boolean => Box::new(BooleanWidget),
            WidgetKind::Date => match format {
                Some(fmt) => Box::new(DateWidget::with_format(fmt)?),
                None => Box::new(DateWidget::new()),
            },
        };
        Ok(widget)
    }

    /// Read a canonical literal of this kind's internal type.
    ///
    /// Integers are decimal, booleans `true`/`false`/`1`/`0`, dates ISO
    /// `YYYY-MM-DD`. Empty text is the null value for every kind.
    pub fn parse_literal(&self, text: &str) -> WidgetResult<Value> {
        if text.is_empty() {
            return Ok(Value::Null);
        }

        match self {
            WidgetKind::Generic | WidgetKind::Char => Ok(Value::from(text)),
            WidgetKind::Integer => IntegerWidget.clean(Some(text)),
            WidgetKind::Boolean => match text.to_lowercase().as_str() {
                "true" | "1" => Ok(Value::Boolean(true)),
                "false" | "0" => Ok(Value::Boolean(false)),
                _ => Err(WidgetError::format(
                    "boolean",
                    text,
                    "expected true, false, 1 or 0",
                )),
            },
            WidgetKind::Date => DateWidget::new().clean(Some(text)),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" => Ok(WidgetKind::Generic),
            "integer" | "int" => Ok(WidgetKind::Integer),
            "char" | "text" | "string" => Ok(WidgetKind::Char),
            "boolean" | "bool" => Ok(WidgetKind::Boolean),
            "date" => Ok(WidgetKind::Date),
            other => Err(WidgetError::configuration(format!(
                "Invalid widget '{}'. Use 'generic', 'integer', 'char', 'boolean', or 'date'",
                other
            ))),
        }
    }
}
