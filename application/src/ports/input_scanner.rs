//! Input scanner port
//!
//! The directory-scan primitive behind the input-data check.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while scanning an input directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("not a directory")]
    NotADirectory,

    #[error("{0}")]
    Io(String),
}

/// Port for listing input files
pub trait InputScanner: Send + Sync {
    /// Files directly inside `dir` whose name ends with `extension`
    fn matching_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError>;
}
