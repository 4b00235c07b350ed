//! Error types and handling infrastructure for widget conversions

use anyhow::Error;
use std::fmt;

/// Text could not be parsed into the widget's internal type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub widget: &'static str,
    pub value: String,
    pub reason: String,
}

impl FormatError {
    pub fn new(widget: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            widget,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} value '{}': {}",
            self.widget, self.value, self.reason
        )
    }
}

impl std::error::Error for FormatError {}

/// Main error type for widget operations
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<WidgetError>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl WidgetError {
    pub fn format(widget: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format(FormatError::new(widget, value, reason))
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn field(field: impl Into<String>, source: WidgetError) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// The format error at the root of this error, if any
    pub fn as_format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format(err) => Some(err),
            Self::Field { source, .. } => source.as_format_error(),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Format(err) => {
                format!(
                    "Cannot read '{}' as {}: {}",
                    err.value, err.widget, err.reason
                )
            }
            Self::Configuration { message } => format!("Configuration error: {}", message),
            Self::Field { field, source } => {
                format!("Field '{}': {}", field, source.user_message())
            }
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

/// Result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;
