use serde::{Deserialize, Serialize};
use std::path::Path;

/// A case-insensitive set of file extensions.
///
/// Extensions are stored without the leading dot and lowercased, so
/// `".VST3"`, `"vst3"` and `".vst3"` all describe the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        Self {
            extensions: normalized,
        }
    }

    /// Returns true if the path's extension is in this set.
    ///
    /// Only the final extension counts, and a bare dotfile such as
    /// `.ini` has no extension at all.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// The two bucket names that always appear in the check report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedLabels {
    /// Items found directly in the root, with no vendor folder.
    pub unknown: String,
    /// Items whose extension is not a plugin extension.
    pub not_recognized: String,
}

impl ReservedLabels {
    pub fn is_reserved(&self, label: &str) -> bool {
        label == self.unknown || label == self.not_recognized
    }
}

impl Default for ReservedLabels {
    fn default() -> Self {
        Self {
            unknown: "_Unknown".to_string(),
            not_recognized: "_Not recognized".to_string(),
        }
    }
}

/// How a vendor label is derived from a plugin's parent folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VendorGrouping {
    /// The whole folder path between the root and the plugin,
    /// e.g. `Acme/x64` for `root/Acme/x64/Synth.vst3`.
    #[default]
    ParentPath,
    /// Only the first folder under the root, e.g. `Acme`.
    TopLevel,
}

impl VendorGrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorGrouping::ParentPath => "parent-path",
            VendorGrouping::TopLevel => "top-level",
        }
    }
}

impl std::str::FromStr for VendorGrouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parent-path" | "parent" | "path" => Ok(VendorGrouping::ParentPath),
            "top-level" | "top" => Ok(VendorGrouping::TopLevel),
            _ => Err(format!(
                "Unknown vendor grouping: {}. Use 'parent-path' or 'top-level'",
                s
            )),
        }
    }
}

impl std::fmt::Display for VendorGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the walker and classifier need to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    pub plugin_extensions: ExtensionSet,
    pub excluded_extensions: ExtensionSet,
    pub labels: ReservedLabels,
    pub grouping: VendorGrouping,
}

impl ScanRules {
    pub fn is_plugin(&self, path: &Path) -> bool {
        self.plugin_extensions.matches(path)
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.excluded_extensions.matches(path)
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            plugin_extensions: ExtensionSet::new([".vst3", ".dll"]),
            excluded_extensions: ExtensionSet::new([".ini"]),
            labels: ReservedLabels::default(),
            grouping: VendorGrouping::default(),
        }
    }
}
