use crate::model::{ScanRules, VendorGrouping, VendorTable};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Where a single path ends up in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Vendor label, or one of the reserved labels.
    pub label: String,
    /// Plugin base name, or the path relative to the root for items that
    /// are not recognized.
    pub display: String,
    pub recognized: bool,
}

/// Returns `path` relative to `root`.
///
/// Paths outside the root are returned unchanged.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Derives the vendor label from a path's parent folder relative to the root.
///
/// Returns `None` when the parent is the root itself.
pub fn vendor_label(parent: &Path, grouping: VendorGrouping) -> Option<String> {
    let mut segments = parent.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name),
        _ => None,
    });

    match grouping {
        VendorGrouping::ParentPath => {
            segments.next()?;
            Some(parent.to_string_lossy().into_owned())
        }
        VendorGrouping::TopLevel => segments.next().map(|s| s.to_string_lossy().into_owned()),
    }
}

pub fn classify(path: &Path, root: &Path, rules: &ScanRules) -> Classification {
    let relative = relative_to(path, root);
    let parent = relative.parent().unwrap_or_else(|| Path::new(""));
    let base_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if rules.is_plugin(path) {
        let label = vendor_label(parent, rules.grouping)
            .unwrap_or_else(|| rules.labels.unknown.clone());
        Classification {
            label,
            display: base_name,
            recognized: true,
        }
    } else {
        Classification {
            label: rules.labels.not_recognized.clone(),
            display: relative.to_string_lossy().into_owned(),
            recognized: false,
        }
    }
}

/// Classifies every path and collects the results by label.
pub fn group<'a, I>(paths: I, root: &Path, rules: &ScanRules) -> VendorTable
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    let mut table = VendorTable::new(rules.labels.clone());

    for path in paths {
        let classification = classify(path, root, rules);
        debug!(
            path = %path.display(),
            label = %classification.label,
            recognized = classification.recognized,
            "Classified"
        );
        table.push(&classification.label, classification.display);
    }

    table
}
