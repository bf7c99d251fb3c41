//! Output formatting for CLI
//!
//! Unified table/JSON/YAML rendering shared by every command.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Table,
        }
    }
}

/// Print rows in the requested format; `data` is what JSON/YAML show and
/// `empty` is shown instead of a table with no rows
pub fn print_output<T: Tabled, S: Serialize + ?Sized>(
    rows: Vec<T>,
    data: &S,
    format: OutputFormat,
    empty: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows, empty),
        OutputFormat::Json => print_json(data)?,
        OutputFormat::Yaml => print_yaml(data)?,
    }
    Ok(())
}

/// Print data as a table using the tabled crate
pub fn print_table<T: Tabled>(data: Vec<T>, empty: &str) {
    match render_table(data) {
        Some(table) => println!("{}", table),
        None => println!("{}", empty.yellow()),
    }
}

fn render_table<T: Tabled>(data: Vec<T>) -> Option<String> {
    if data.is_empty() {
        return None;
    }
    Some(Table::new(data).to_string())
}

/// Print data as pretty-printed JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print data as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    println!("{}", yaml);
    Ok(())
}

/// Print a success message with green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print a warning message with yellow exclamation
pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message.yellow());
}
