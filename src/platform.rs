//! Cross-platform path resolution.
//!
//! This module knows where VST3 plugins are conventionally installed and
//! where the configuration file lives.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        return Platform::MacOS;
        #[cfg(target_os = "windows")]
        return Platform::Windows;
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return Platform::Linux;
    }
}

/// Returns the system-wide VST3 folder for the current platform.
///
/// Platform-specific locations:
/// - Linux: `~/.vst3/`
/// - macOS: `/Library/Audio/Plug-Ins/VST3/`
/// - Windows: `C:\Program Files\Common Files\VST3\`
///
/// The folder is returned whether or not it exists, so it can be offered
/// as a prompt default.
pub fn default_vst3_dir() -> PathBuf {
    vst3_dir_for(Platform::current())
}

pub fn vst3_dir_for(platform: Platform) -> PathBuf {
    match platform {
        Platform::Linux => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".vst3"),
        Platform::MacOS => PathBuf::from("/Library/Audio/Plug-Ins/VST3"),
        Platform::Windows => PathBuf::from(r"C:\Program Files\Common Files\VST3"),
    }
}

/// Returns the directory holding `config.toml`.
///
/// Platform-specific locations:
/// - Linux: `~/.config/vst3-list/`
/// - macOS: `~/Library/Application Support/vst3-list/`
/// - Windows: `%APPDATA%\vst3-list\`
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vst3-list")
}
