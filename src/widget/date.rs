//! Date field widget

use std::fmt::Write;

use chrono::format::{
    parse_and_remainder, Item, Pad, ParseErrorKind, ParseResult, Parsed, StrftimeItems,
};
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use super::Widget;
use crate::error::{WidgetError, WidgetResult};
use crate::value::Value;

/// Format used when a date widget is built without one
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Year assumed when the format has no year field
const FALLBACK_YEAR: i64 = 1900;

/// Widget for converting date fields.
///
/// The format is a strftime-style pattern. Import text must match it
/// exactly: no leading or trailing input, no whitespace the pattern does not
/// contain, no sign in front of a number, no out-of-range fields and no
/// impossible calendar dates. A missing year, month or day falls back to
/// 1900, January and the 1st. Time-of-day fields in the pattern are read and
/// then dropped, and render as midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWidget {
    format: String,
}

impl DateWidget {
    /// Date widget using [`DEFAULT_DATE_FORMAT`]
    pub fn new() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Date widget with a custom pattern, e.g. `%d/%m/%Y`.
    ///
    /// The pattern is checked up front so that rendering a cleaned date can
    /// never fail. Time zone fields are refused since a date has no offset.
    pub fn with_format(format: impl Into<String>) -> WidgetResult<Self> {
        let format = format.into();

        if format.is_empty() {
            return Err(WidgetError::configuration("date format must not be empty"));
        }

        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(WidgetError::configuration(format!(
                "date format '{}' contains an unsupported specifier",
                format
            )));
        }

        let mut sample = String::new();
        let midnight = NaiveDate::default().and_time(NaiveTime::MIN);
        if write!(sample, "{}", midnight.format(&format)).is_err() {
            return Err(WidgetError::configuration(format!(
                "date format '{}' has fields a date cannot render",
                format
            )));
        }

        Ok(Self { format })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Match `text` against the format one item at a time.
    ///
    /// chrono skips whitespace and accepts a sign in front of numeric
    /// fields, so both are checked here before each item is handed over.
    fn parse_date(&self, text: &str) -> Result<NaiveDate, String> {
        let mut parsed = Parsed::new();
        let mut rest = text;

        for item in StrftimeItems::new(&self.format) {
            match &item {
                Item::Space(_) | Item::OwnedSpace(_) => {}
                // %e pads with spaces
                Item::Numeric(_, Pad::Space) => {
                    let digits = rest.trim_start_matches(' ');
                    if digits.starts_with(['+', '-']) {
                        return Err(format!("unexpected sign at '{}'", rest));
                    }
                }
                Item::Numeric(..) => {
                    if rest.starts_with(char::is_whitespace) {
                        return Err(format!("unexpected whitespace at '{}'", rest));
                    }
                    if rest.starts_with(['+', '-']) {
                        return Err(format!("unexpected sign at '{}'", rest));
                    }
                }
                _ => {
                    if rest.starts_with(char::is_whitespace) {
                        return Err(format!("unexpected whitespace at '{}'", rest));
                    }
                }
            }

            rest = parse_and_remainder(&mut parsed, rest, std::iter::once(&item))
                .map_err(|e| e.to_string())?;
        }

        if !rest.is_empty() {
            return Err(format!("unconverted input '{}'", rest));
        }

        match parsed.to_naive_date() {
            Err(e) if e.kind() == ParseErrorKind::NotEnough => {
                fill_missing_date_fields(&mut parsed).map_err(|e| e.to_string())?;
                parsed.to_naive_date().map_err(|e| e.to_string())
            }
            result => result.map_err(|e| e.to_string()),
        }
    }
}

/// Default whatever part of a calendar date the text left unset
fn fill_missing_date_fields(parsed: &mut Parsed) -> ParseResult<()> {
    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some();
    let has_ordinal = parsed.ordinal().is_some();
    let has_week = parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();

    if !has_year {
        parsed.set_year(FALLBACK_YEAR)?;
    }
    if parsed.month().is_none() && !has_ordinal && !has_week {
        parsed.set_month(1)?;
    }
    if parsed.day().is_none() && !has_ordinal && !has_week {
        parsed.set_day(1)?;
    }
    Ok(())
}

impl Default for DateWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for DateWidget {
    fn name(&self) -> &'static str {
        "date"
    }

    fn clean(&self, value: Option<&str>) -> WidgetResult<Value> {
        let text = match value {
            None | Some("") => return Ok(Value::Null),
            Some(text) => text,
        };

        self.parse_date(text).map(Value::Date).map_err(|reason| {
            debug!(value = text, format = %self.format, error = %reason, "rejected date value");
            WidgetError::format(
                self.name(),
                text,
                format!("{} (expected format {})", reason, self.format),
            )
        })
    }

    fn render(&self, value: &Value) -> String {
        match value {
            Value::Date(date) => {
                let mut out = String::new();
                let midnight = date.and_time(NaiveTime::MIN);
                match write!(out, "{}", midnight.format(&self.format)) {
                    Ok(()) => out,
                    Err(_) => {
                        warn!(format = %self.format, "date format failed, rendering as ISO date");
                        value.to_text()
                    }
                }
            }
            Value::Null => String::new(),
            other => {
                warn!(
                    value_type = other.type_name(),
                    "date widget rendering a non-date value"
                );
                other.to_text()
            }
        }
    }
}
