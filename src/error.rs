//! Error types for scanning and report export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Plugin folder does not exist or is not a directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("Report folder does not exist or is not a directory: {}", path.display())]
    OutputDirMissing { path: PathBuf },

    #[error("Failed to write report {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidRoot { .. } => 2,
            Self::OutputDirMissing { .. } => 3,
            Self::OutputWrite { .. } => 4,
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}
