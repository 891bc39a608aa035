//! Executable probe port
//!
//! Locates programs on the search path and asks them for their version.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while querying an executable's version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("failed to run {program}: {reason}")]
    Io { program: String, reason: String },

    #[error("{program} --version exited with status {code}")]
    Failed { program: String, code: i32 },

    #[error("{program} --version printed nothing")]
    EmptyOutput { program: String },
}

/// Port for executable discovery
///
/// The search path is treated as read-only input.
pub trait ExecutableProbe: Send + Sync {
    /// Full path of `program` if it is on the search path
    fn locate(&self, program: &str) -> Option<PathBuf>;

    fn is_available(&self, program: &str) -> bool {
        self.locate(program).is_some()
    }

    /// Version string reported by the executable
    fn version(&self, executable: &Path) -> Result<String, ProbeError>;
}
