//! Command-line interface module

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WidgetError, WidgetResult};
use crate::schema::Schema;
use crate::value::Value;
use crate::widget::{Widget, WidgetKind};

pub mod logging;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "widgetconv")]
#[command(about = "Convert field values between interchange text and typed values")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read interchange text into a typed value
    Clean(ValueArgs),
    /// Write a typed value as interchange text
    Render(ValueArgs),
    /// Clean one record against a JSON schema definition
    Record {
        /// Schema file: a JSON array of {"name", "widget", "format"} objects
        #[arg(long)]
        schema: PathBuf,
        /// Cells as name=value pairs
        #[arg(value_name = "NAME=VALUE")]
        cells: Vec<String>,
    },
}

/// Arguments shared by the single-value commands
#[derive(clap::Args, Debug, Clone)]
pub struct ValueArgs {
    /// Widget used for the conversion
    #[arg(short, long, value_enum)]
    pub widget: WidgetArg,

    /// Date format (strftime pattern, date widget only)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// The value; omit it for an absent cell
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}

/// Widget kinds for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum WidgetArg {
    #[value(name = "generic")]
    Generic,
    #[value(name = "integer", alias = "int")]
    Integer,
    #[value(name = "char", alias = "text")]
    Char,
    #[value(name = "boolean", alias = "bool")]
    Boolean,
    #[value(name = "date")]
    Date,
}

impl From<WidgetArg> for WidgetKind {
    fn from(arg: WidgetArg) -> Self {
        match arg {
            WidgetArg::Generic => WidgetKind::Generic,
            WidgetArg::Integer => WidgetKind::Integer,
            WidgetArg::Char => WidgetKind::Char,
            WidgetArg::Boolean => WidgetKind::Boolean,
            WidgetArg::Date => WidgetKind::Date,
        }
    }
}

/// Run a parsed command and return the text to print on success
pub fn execute(args: &Args) -> CliResult<String> {
    match &args.command {
        Commands::Clean(value_args) => run_clean(value_args),
        Commands::Render(value_args) => run_render(value_args),
        Commands::Record { schema, cells } => run_record(schema, cells),
    }
}

fn build_widget(args: &ValueArgs) -> WidgetResult<(WidgetKind, Box<dyn Widget>)> {
    let kind = WidgetKind::from(args.widget);
    let widget = kind.build(args.format.as_deref())?;
    Ok((kind, widget))
}

fn run_clean(args: &ValueArgs) -> CliResult<String> {
    let (_, widget) = build_widget(args)?;
    let value = widget.clean(args.value.as_deref())?;

    if args.json {
        to_json(&value)
    } else {
        Ok(value.to_text())
    }
}

fn run_render(args: &ValueArgs) -> CliResult<String> {
    let (kind, widget) = build_widget(args)?;
    let value = match args.value.as_deref() {
        Some(text) => kind.parse_literal(text)?,
        None => Value::Null,
    };
    let rendered = widget.render(&value);

    if args.json {
        to_json(&rendered)
    } else {
        Ok(rendered)
    }
}

fn run_record(schema_path: &Path, cells: &[String]) -> CliResult<String> {
    let definition = fs::read_to_string(schema_path).map_err(|e| {
        WidgetError::configuration(format!(
            "cannot read schema '{}': {}",
            schema_path.display(),
            e
        ))
    })?;
    let schema = Schema::from_json(&definition)?;

    let raw = parse_cells(cells)?;
    let record = schema.clean_record(&raw)?;
    to_json(&record)
}

/// Split `name=value` arguments; the value may be empty
fn parse_cells(cells: &[String]) -> CliResult<IndexMap<String, String>> {
    cells
        .iter()
        .map(|cell| {
            cell.split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| {
                    WidgetError::configuration(format!(
                        "Invalid cell '{}'. Use NAME=VALUE",
                        cell
                    ))
                })
        })
        .collect()
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string(value).map_err(|e| WidgetError::Other(e.into()))
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &WidgetError) {
    CliUtils::show_error(&error.user_message());

    if let Some(format_error) = error.as_format_error() {
        if format_error.widget == "date" {
            eprintln!("\nTip: Use --format to match the date pattern of your data");
        }
    }

    eprintln!("\nTry 'widgetconv --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, WidgetError>;
