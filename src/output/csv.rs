//! CSV export of a [`VendorTable`].
//!
//! Two files are written into the report folder:
//!
//! - the plugin list, one column per vendor
//! - the check list, with the unknown-vendor and not-recognized columns
//!
//! Each column is headed by its label. Shorter columns are padded with
//! blank cells. A file with no columns at all is left empty.

use crate::error::{Result, ScanError};
use crate::model::{VendorColumn, VendorTable};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

pub const LIST_FILE_NAME: &str = "VST3_List.csv";
pub const CHECK_FILE_NAME: &str = "VST3_2Check.csv";

/// File names for the two reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNames {
    pub list: String,
    pub check: String,
}

impl Default for ReportNames {
    fn default() -> Self {
        Self {
            list: LIST_FILE_NAME.to_string(),
            check: CHECK_FILE_NAME.to_string(),
        }
    }
}

/// Paths of the reports that were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub list: PathBuf,
    pub check: PathBuf,
}

/// Writes the plugin list and the check list into `out_dir`.
///
/// # Errors
///
/// Returns [`ScanError::OutputDirMissing`] if `out_dir` is not an existing
/// directory, or [`ScanError::OutputWrite`] naming the file that failed.
pub fn write_reports(
    table: &VendorTable,
    out_dir: &Path,
    names: &ReportNames,
) -> Result<ReportFiles> {
    if !out_dir.is_dir() {
        return Err(ScanError::OutputDirMissing {
            path: out_dir.to_path_buf(),
        });
    }

    let list = out_dir.join(&names.list);
    write_columns(&list, table.vendor_columns())?;

    let check = out_dir.join(&names.check);
    write_columns(&check, table.check_columns())?;

    info!(list = %list.display(), check = %check.display(), "Reports written");

    Ok(ReportFiles { list, check })
}

/// Writes `columns` side by side into a new CSV file at `path`.
pub fn write_columns<'a, I>(path: &Path, columns: I) -> Result<()>
where
    I: IntoIterator<Item = &'a VendorColumn>,
{
    let columns: Vec<&VendorColumn> = columns.into_iter().collect();

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| ScanError::output_write(path, e))?;

    write_table(&mut writer, &columns).map_err(|e| ScanError::output_write(path, e))?;
    writer.flush().map_err(|e| ScanError::output_write(path, e))?;

    Ok(())
}

fn write_table<W: io::Write>(
    writer: &mut csv::Writer<W>,
    columns: &[&VendorColumn],
) -> csv::Result<()> {
    if columns.is_empty() {
        return Ok(());
    }

    writer.write_record(columns.iter().map(|c| c.label.as_str()))?;

    let rows = columns.iter().map(|c| c.items.len()).max().unwrap_or(0);
    for row in 0..rows {
        writer.write_record(
            columns
                .iter()
                .map(|c| c.items.get(row).map(String::as_str).unwrap_or("")),
        )?;
    }

    Ok(())
}
