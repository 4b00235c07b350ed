//! Pass-through widgets

use super::Widget;

/// Base widget: text is imported unchanged and values export as their
/// default textual representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericWidget;

impl Widget for GenericWidget {
    fn name(&self) -> &'static str {
        "generic"
    }
}

/// Widget for text fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharWidget;

impl Widget for CharWidget {
    fn name(&self) -> &'static str {
        "char"
    }
}
