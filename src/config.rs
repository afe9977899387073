//! Configuration file handling.
//!
//! This module provides loading and saving of vst3-list configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/vst3-list/config.toml`
//! - macOS: `~/Library/Application Support/vst3-list/config.toml`
//! - Windows: `%APPDATA%\vst3-list\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! default_root = "D:\\Audio\\VST3"
//! plugin_extensions = [".vst3", ".dll"]
//! excluded_extensions = [".ini"]
//! unknown_label = "_Unknown"
//! not_recognized_label = "_Not recognized"
//! vendor_grouping = "top-level"
//! list_file_name = "VST3_List.csv"
//! check_file_name = "VST3_2Check.csv"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{ExtensionSet, ReservedLabels, ScanRules, VendorGrouping};
use crate::output::{ReportNames, CHECK_FILE_NAME, LIST_FILE_NAME};
use crate::platform;

/// Application configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to change.
///
/// # Example
///
/// ```no_run
/// use vst3_list::Config;
///
/// let config = Config::load().unwrap();
/// let rules = config.scan_rules();
///
/// println!("Plugin extensions: {:?}", rules.plugin_extensions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Plugin folder offered when none is given on the command line.
    ///
    /// Default: the platform's VST3 folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_root: Option<PathBuf>,

    /// Report folder offered when none is given on the command line.
    ///
    /// Default: the current working directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output_dir: Option<PathBuf>,

    /// Extensions that mark a file or folder as a plugin.
    ///
    /// Matching is case-insensitive; the leading dot is optional.
    pub plugin_extensions: Vec<String>,

    /// Extensions of files that are dropped without being reported.
    ///
    /// A file matching both lists is dropped. Folders are never excluded.
    pub excluded_extensions: Vec<String>,

    /// Column for plugins found directly in the plugin folder.
    pub unknown_label: String,

    /// Column for files that are not plugins.
    pub not_recognized_label: String,

    /// How vendor labels are derived from folder names.
    pub vendor_grouping: VendorGrouping,

    pub list_file_name: String,

    pub check_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        let labels = ReservedLabels::default();
        Self {
            default_root: None,
            default_output_dir: None,
            plugin_extensions: vec![".vst3".to_string(), ".dll".to_string()],
            excluded_extensions: vec![".ini".to_string()],
            unknown_label: labels.unknown,
            not_recognized_label: labels.not_recognized,
            vendor_grouping: VendorGrouping::default(),
            list_file_name: LIST_FILE_NAME.to_string(),
            check_file_name: CHECK_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }

    /// Plugin folder to scan when none is given.
    pub fn root_or_default(&self) -> PathBuf {
        self.default_root
            .clone()
            .unwrap_or_else(platform::default_vst3_dir)
    }

    /// Builds the normalized rules used by the scanner.
    pub fn scan_rules(&self) -> ScanRules {
        ScanRules {
            plugin_extensions: ExtensionSet::new(&self.plugin_extensions),
            excluded_extensions: ExtensionSet::new(&self.excluded_extensions),
            labels: ReservedLabels {
                unknown: self.unknown_label.clone(),
                not_recognized: self.not_recognized_label.clone(),
            },
            grouping: self.vendor_grouping,
        }
    }

    pub fn report_names(&self) -> ReportNames {
        ReportNames {
            list: self.list_file_name.clone(),
            check: self.check_file_name.clone(),
        }
    }
}
