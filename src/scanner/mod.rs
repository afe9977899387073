//! Plugin folder scanning.
//!
//! A scan is two steps: [`walk`] lists the plugin bundles and plain files
//! under the root without entering bundles, then [`group`] classifies each
//! of them and collects the results into a [`VendorTable`].
//!
//! # Example
//!
//! ```no_run
//! use vst3_list::{scanner::PluginScanner, ScanRules};
//!
//! let scanner = PluginScanner::new(ScanRules::default());
//! let report = scanner.scan("C:\\Program Files\\Common Files\\VST3")?;
//!
//! for column in report.table.vendor_columns() {
//!     println!("{}: {} plugins", column.label, column.items.len());
//! }
//! # Ok::<(), vst3_list::ScanError>(())
//! ```

mod classify;
mod walk;

pub use classify::{classify, group, relative_to, vendor_label, Classification};
pub use walk::{visit, walk, BundleSet, SkippedPath, Step, WalkOutcome};

use crate::error::Result;
use crate::model::{ScanRules, VendorTable};
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of scanning one plugin folder.
#[derive(Debug)]
pub struct ScanReport {
    pub root: PathBuf,
    pub table: VendorTable,
    /// Plain folders seen during the walk.
    pub subdirs: Vec<PathBuf>,
    /// Folders that could not be read.
    pub skipped: Vec<SkippedPath>,
}

pub struct PluginScanner {
    rules: ScanRules,
}

impl PluginScanner {
    pub fn new(rules: ScanRules) -> Self {
        Self { rules }
    }

    /// Scans `root` and groups everything found by vendor.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidRoot`](crate::ScanError::InvalidRoot) if
    /// `root` is not an existing directory. Unreadable subfolders are not
    /// errors; they are listed in [`ScanReport::skipped`].
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<ScanReport> {
        let root = root.as_ref();
        let outcome = walk(root, &self.rules)?;
        let table = group(&outcome.items, root, &self.rules);

        info!(
            root = %root.display(),
            vendors = table.vendor_columns().count(),
            plugins = table.plugin_count(),
            not_recognized = table.not_recognized().len(),
            skipped = outcome.skipped.len(),
            "Scan complete"
        );

        Ok(ScanReport {
            root: root.to_path_buf(),
            table,
            subdirs: outcome.subdirs,
            skipped: outcome.skipped,
        })
    }
}

impl Default for PluginScanner {
    fn default() -> Self {
        Self::new(ScanRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Acme/Reverb.vst3 (bundle with internals), Beta/Comp.dll,
    /// orphan.txt and hidden.ini.
    fn sample_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let bundle = root.join("Acme").join("Reverb.vst3");
        fs::create_dir_all(&bundle).unwrap();
        fs::write(bundle.join("main.so"), "").unwrap();
        fs::write(bundle.join("data.bin"), "").unwrap();

        fs::create_dir(root.join("Beta")).unwrap();
        fs::write(root.join("Beta").join("Comp.dll"), "").unwrap();

        fs::write(root.join("orphan.txt"), "").unwrap();
        fs::write(root.join("hidden.ini"), "").unwrap();

        temp_dir
    }

    #[test]
    fn test_scan_sample_tree() {
        let temp_dir = sample_tree();
        let report = PluginScanner::default().scan(temp_dir.path()).unwrap();
        let table = &report.table;

        let vendors: Vec<_> = table
            .vendor_columns()
            .map(|c| (c.label.as_str(), c.items.clone()))
            .collect();
        assert_eq!(
            vendors,
            vec![
                ("Acme", vec!["Reverb.vst3".to_string()]),
                ("Beta", vec!["Comp.dll".to_string()]),
            ]
        );
        assert!(table.unknown().is_empty());
        assert_eq!(table.not_recognized(), &["orphan.txt".to_string()]);
        assert_eq!(table.total_items(), 3);
        assert!(report.skipped.is_empty());
        assert_eq!(report.subdirs.len(), 2);
    }

    #[test]
    fn test_scan_never_lists_bundle_internals_or_excluded_files() {
        let temp_dir = sample_tree();
        let report = PluginScanner::default().scan(temp_dir.path()).unwrap();

        let cells: Vec<&String> = report
            .table
            .columns()
            .iter()
            .flat_map(|c| c.items.iter())
            .collect();
        for absent in ["main.so", "data.bin", "hidden.ini"] {
            assert!(
                !cells.iter().any(|cell| cell.contains(absent)),
                "{} should not be listed",
                absent
            );
        }
    }

    #[test]
    fn test_every_file_lands_in_exactly_one_cell() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("Acme").join("Legacy")).unwrap();
        fs::write(root.join("Acme").join("Synth.vst3"), "").unwrap();
        fs::write(root.join("Acme").join("readme.txt"), "").unwrap();
        fs::write(root.join("Acme").join("settings.ini"), "").unwrap();
        fs::write(root.join("Acme").join("Legacy").join("Old.dll"), "").unwrap();
        fs::write(root.join("Acme").join("Legacy").join("license.pdf"), "").unwrap();
        fs::write(root.join("Loose.vst3"), "").unwrap();

        let report = PluginScanner::default().scan(root).unwrap();
        let table = &report.table;

        assert_eq!(table.get("Acme").unwrap(), &["Synth.vst3".to_string()]);
        let legacy = Path::new("Acme").join("Legacy");
        assert_eq!(
            table.get(&legacy.to_string_lossy()).unwrap(),
            &["Old.dll".to_string()]
        );
        assert_eq!(table.unknown(), &["Loose.vst3".to_string()]);
        assert_eq!(
            table.not_recognized(),
            &[
                Path::new("Acme").join("Legacy").join("license.pdf").to_string_lossy().into_owned(),
                Path::new("Acme").join("readme.txt").to_string_lossy().into_owned(),
            ]
        );
        // six files, one excluded
        assert_eq!(table.total_items(), 5);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp_dir = sample_tree();
        let scanner = PluginScanner::default();

        let first = scanner.scan(temp_dir.path()).unwrap();
        let second = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(first.table, second.table);
    }

    #[test]
    fn test_scan_invalid_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = PluginScanner::default().scan(temp_dir.path().join("missing"));
        assert!(matches!(
            result,
            Err(crate::ScanError::InvalidRoot { .. })
        ));
    }
}
