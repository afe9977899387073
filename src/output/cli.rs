use super::ReportFiles;
use crate::scanner::ScanReport;
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct LabelRow {
    #[tabled(rename = "Vendor")]
    label: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "First item")]
    first: String,
}

#[derive(Tabled)]
struct SkippedRow {
    #[tabled(rename = "Skipped folder")]
    path: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

pub fn print_cli_summary(report: &ScanReport, files: &ReportFiles) -> Result<()> {
    println!();
    println!("Scanned: {}", report.root.display());
    println!();

    let table = &report.table;
    if table.vendor_columns().next().is_none() {
        println!("No vendor folders with plugins found.");
    } else {
        println!("Found {} vendors:", table.vendor_columns().count());
        println!();
        println!("{}", render_vendor_table(report));
    }

    if let Some(skipped) = render_skipped(report) {
        println!();
        println!("{}", skipped);
    }

    println!();
    println!("Summary:");
    println!("  Plugins: {}", table.plugin_count());
    println!("  Without vendor folder: {}", table.unknown().len());
    println!("  Not recognized: {}", table.not_recognized().len());
    println!();
    println!("Plugin list: {}", files.list.display());
    println!("Check list:  {}", files.check.display());

    Ok(())
}

/// Renders one row per vendor column, reserved buckets last.
fn render_vendor_table(report: &ScanReport) -> String {
    let table = &report.table;
    let rows: Vec<LabelRow> = table
        .vendor_columns()
        .chain(table.check_columns())
        .map(|c| LabelRow {
            label: truncate(&c.label, 40),
            items: c.items.len(),
            first: c
                .items
                .first()
                .map(|s| truncate(s, 50))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Renders the folders the walk could not read, if any.
fn render_skipped(report: &ScanReport) -> Option<String> {
    if report.skipped.is_empty() {
        return None;
    }

    let rows: Vec<SkippedRow> = report
        .skipped
        .iter()
        .map(|s| SkippedRow {
            path: s.path.display().to_string(),
            reason: truncate(&s.reason, 60),
        })
        .collect();

    Some(format!(
        "Could not read {} folders:\n\n{}",
        report.skipped.len(),
        Table::new(rows).with(Style::rounded())
    ))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
