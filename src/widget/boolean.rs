//! Boolean field widget

use super::Widget;
use crate::error::WidgetResult;
use crate::value::Value;

/// Widget for converting boolean fields.
///
/// Exports use exactly two tokens. On import only [`BooleanWidget::TRUE_VALUE`]
/// reads as `true`; any other text, including malformed tokens, reads as
/// `false` and is never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanWidget;

impl BooleanWidget {
    pub const TRUE_VALUE: &'static str = "1";
    pub const FALSE_VALUE: &'static str = "0";
}

impl Widget for BooleanWidget {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn clean(&self, value: Option<&str>) -> WidgetResult<Value> {
        Ok(Value::Boolean(value == Some(Self::TRUE_VALUE)))
    }

    fn render(&self, value: &Value) -> String {
        if value.is_truthy() {
            Self::TRUE_VALUE.to_string()
        } else {
            Self::FALSE_VALUE.to_string()
        }
    }
}
