//! Field definitions pairing each field name with its widget
//!
//! A [`Schema`] cleans or renders one record at a time. Reading and writing
//! the interchange file, and collecting errors across many records, is left
//! to the caller.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{WidgetError, WidgetResult};
use crate::value::Value;
use crate::widget::{Widget, WidgetKind};

/// A cleaned record: field name to internal value, in schema order
pub type Record = IndexMap<String, Value>;

/// Serializable description of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub widget: WidgetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, widget: WidgetKind) -> Self {
        Self {
            name: name.into(),
            widget,
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Ordered mapping from field name to widget
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Arc<dyn Widget>)>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Build a schema from field descriptions
    pub fn from_specs(specs: &[FieldSpec]) -> WidgetResult<Self> {
        let mut builder = Self::builder();
        for spec in specs {
            let widget = spec
                .widget
                .build(spec.format.as_deref())
                .map_err(|e| WidgetError::field(&spec.name, e))?;
            builder = builder.boxed_field(&spec.name, widget);
        }
        builder.build()
    }

    /// Build a schema from a JSON array of field descriptions
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        let specs: Vec<FieldSpec> = serde_json::from_str(json).map_err(|e| {
            WidgetError::configuration(format!("invalid schema definition: {}", e))
        })?;
        Self::from_specs(&specs)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn widget(&self, field: &str) -> Option<&dyn Widget> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, widget)| &**widget)
    }

    /// Clean one raw record.
    ///
    /// Columns not present in `raw` are cleaned as absent values; columns
    /// not in the schema are ignored. The first field that fails aborts the
    /// record.
    pub fn clean_record(&self, raw: &IndexMap<String, String>) -> WidgetResult<Record> {
        let mut record = Record::with_capacity(self.fields.len());
        for (name, widget) in &self.fields {
            let value = widget
                .clean(raw.get(name).map(String::as_str))
                .map_err(|e| WidgetError::field(name, e))?;
            record.insert(name.clone(), value);
        }
        Ok(record)
    }

    /// Render one record into cells, in schema order.
    ///
    /// Fields missing from the record render as the widget's rendering of
    /// [`Value::Null`].
    pub fn render_record(&self, record: &Record) -> Vec<String> {
        self.fields
            .iter()
            .map(|(name, widget)| match record.get(name) {
                Some(value) => widget.render(value),
                None => widget.render(&Value::Null),
            })
            .collect()
    }
}

/// Incremental [`Schema`] construction
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, Arc<dyn Widget>)>,
}

impl SchemaBuilder {
    pub fn field<W: Widget + 'static>(mut self, name: impl Into<String>, widget: W) -> Self {
        self.fields.push((name.into(), Arc::new(widget)));
        self
    }

    pub fn boxed_field(mut self, name: impl Into<String>, widget: Box<dyn Widget>) -> Self {
        self.fields.push((name.into(), Arc::from(widget)));
        self
    }

    /// Finish the schema; field names must be unique
    pub fn build(self) -> WidgetResult<Schema> {
        for (i, (name, _)) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|(other, _)| other == name) {
                return Err(WidgetError::configuration(format!(
                    "duplicate field '{}'",
                    name
                )));
            }
        }

        trace!(fields = self.fields.len(), "schema built");
        Ok(Schema {
            fields: self.fields,
        })
    }
}
