//! Integer field widget

use tracing::debug;

use super::Widget;
use crate::error::{WidgetError, WidgetResult};
use crate::value::Value;

/// Widget for converting integer fields.
///
/// Empty or absent text imports as [`Value::Null`]. Otherwise the text,
/// with surrounding whitespace removed, must be a base-10 literal with an
/// optional sign that fits in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerWidget;

impl Widget for IntegerWidget {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn clean(&self, value: Option<&str>) -> WidgetResult<Value> {
        let text = match value {
            None | Some("") => return Ok(Value::Null),
            Some(text) => text,
        };

        text.trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| {
                debug!(value = text, error = %e, "rejected integer value");
                WidgetError::format(self.name(), text, e.to_string())
            })
    }
}
