//! Salary field inspection

use anyhow::Result;
use serde::Serialize;
use staffroll_common::salary::{filter_digits, format_grouped, parse_amount};
use staffroll_common::{EditorConfig, SalaryBand};
use tabled::Tabled;

use crate::output::{self, OutputFormat};

/// How one raw entry moves through the free-text field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryReport {
    pub input: String,
    pub digits: String,
    pub grouped: Option<String>,
    pub display: Option<String>,
    pub band: Option<String>,
}

#[derive(Tabled)]
struct SalaryRow {
    stage: &'static str,
    value: String,
}

#[derive(Debug, Serialize, Tabled)]
struct BandRow {
    label: String,
    from: u64,
}

pub fn inspect(input: &str, config: &EditorConfig) -> SalaryReport {
    let salary = &config.salary;
    let digits = filter_digits(input, salary.max_digits);
    let grouped = format_grouped(&digits, salary.grouping_separator);
    let display = grouped
        .as_ref()
        .map(|g| format!("{}{}", salary.currency_symbol, g));
    let band = parse_amount(&digits).map(|amount| SalaryBand::for_amount(amount).label());

    SalaryReport {
        input: input.to_string(),
        digits,
        grouped,
        display,
        band,
    }
}

pub fn show(input: &str, config: &EditorConfig, format: OutputFormat) -> Result<()> {
    let report = inspect(input, config);
    let dash = || "-".to_string();

    let rows = vec![
        SalaryRow {
            stage: "typed",
            value: report.input.clone(),
        },
        SalaryRow {
            stage: "while editing",
            value: if report.digits.is_empty() { dash() } else { report.digits.clone() },
        },
        SalaryRow {
            stage: "at rest",
            value: report.display.clone().unwrap_or_else(dash),
        },
        SalaryRow {
            stage: "band",
            value: report.band.clone().unwrap_or_else(dash),
        },
    ];
    output::print_output(rows, &report, format, "No salary")
}

pub fn bands(format: OutputFormat) -> Result<()> {
    let rows: Vec<BandRow> = SalaryBand::all()
        .into_iter()
        .map(|band| BandRow {
            label: band.label(),
            from: band.floor_amount(),
        })
        .collect();
    match format {
        OutputFormat::Table => output::print_table(rows, "No salary bands"),
        OutputFormat::Json => output::print_json(&rows)?,
        OutputFormat::Yaml => output::print_yaml(&rows)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_mixed_input() {
        let report = inspect("12a3b456789", &EditorConfig::default());
        assert_eq!(report.digits, "123456");
        assert_eq!(report.grouped.as_deref(), Some("123,456"));
        assert_eq!(report.display.as_deref(), Some("€123,456"));
        assert_eq!(report.band.as_deref(), Some("120k–125k"));
    }

    #[test]
    fn test_inspect_without_digits() {
        let report = inspect("n/a", &EditorConfig::default());
        assert_eq!(report.digits, "");
        assert_eq!(report.grouped, None);
        assert_eq!(report.band, None);
    }

    #[test]
    fn test_inspect_uses_configured_separator() {
        let mut config = EditorConfig::default();
        config.salary.grouping_separator = '.';
        config.salary.currency_symbol = "$".to_string();

        let report = inspect("250000", &config);
        assert_eq!(report.display.as_deref(), Some("$250.000"));
        assert_eq!(report.band.as_deref(), Some(">200k"));
    }
}
