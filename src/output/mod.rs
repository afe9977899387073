mod cli;
mod csv;
mod json;

pub use self::cli::print_cli_summary;
pub use self::csv::{
    write_columns, write_reports, ReportFiles, ReportNames, CHECK_FILE_NAME, LIST_FILE_NAME,
};
pub use self::json::print_json;

use crate::scanner::ScanReport;
use anyhow::Result;

/// Output format for the terminal summary printed after a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table of label counts
    Table,
    /// Full vendor table as JSON
    Json,
    /// Nothing on stdout; the CSV reports are still written
    Quiet,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "none" | "quiet" => Ok(OutputFormat::Quiet),
            _ => Err(format!(
                "Unknown format: {}. Use 'table', 'json', or 'none'",
                s
            )),
        }
    }
}

pub fn print_result(
    report: &ScanReport,
    files: &ReportFiles,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => print_cli_summary(report, files),
        OutputFormat::Json => print_json(report, files),
        OutputFormat::Quiet => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("quiet".parse::<OutputFormat>().unwrap(), OutputFormat::Quiet);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }
}
