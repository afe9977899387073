use super::ReportFiles;
use crate::model::VendorTable;
use crate::scanner::ScanReport;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    list_file: &'a Path,
    check_file: &'a Path,
    vendors: &'a VendorTable,
    skipped: Vec<&'a Path>,
}

pub fn print_json(report: &ScanReport, files: &ReportFiles) -> Result<()> {
    println!("{}", to_json(report, files)?);
    Ok(())
}

fn to_json(report: &ScanReport, files: &ReportFiles) -> Result<String> {
    let json = JsonReport {
        root: &report.root,
        list_file: &files.list,
        check_file: &files.check,
        vendors: &report.table,
        skipped: report.skipped.iter().map(|s| s.path.as_path()).collect(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReservedLabels;
    use std::path::PathBuf;

    #[test]
    fn test_json_keeps_label_order() {
        let mut table = VendorTable::new(ReservedLabels::default());
        table.push("Beta", "Comp.dll");
        table.push("Acme", "Reverb.vst3");

        let report = ScanReport {
            root: PathBuf::from("/vst"),
            table,
            subdirs: Vec::new(),
            skipped: Vec::new(),
        };
        let files = ReportFiles {
            list: PathBuf::from("/out/VST3_List.csv"),
            check: PathBuf::from("/out/VST3_2Check.csv"),
        };

        let json = to_json(&report, &files).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["root"], "/vst");
        assert_eq!(value["vendors"]["Beta"][0], "Comp.dll");
        assert!(value["vendors"]["_Unknown"].as_array().unwrap().is_empty());
        assert!(json.find("\"Beta\"").unwrap() < json.find("\"Acme\"").unwrap());
    }
}
