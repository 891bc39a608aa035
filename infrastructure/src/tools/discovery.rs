//! Executable discovery on the search path
//!
//! Implements [`ExecutableProbe`] with `which` for lookups and
//! `<program> --version` for version queries.
//!
//! ```text
//! $ fixcore -g genes/
//! -> Checking required tools...
//! v snakemake 8.20.5 found
//! -> Using mamba to manage workflow environments
//! ```

use fixcore_application::{ExecutableProbe, ProbeError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

/// Probe backed by the process search path
#[derive(Debug, Clone, Default)]
pub struct PathExecutableProbe {
    /// Explicit search path; `None` uses `PATH`
    search_path: Option<OsString>,
}

impl PathExecutableProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search only the given `PATH`-style list of directories
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl ExecutableProbe for PathExecutableProbe {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(program, Some(paths), cwd)
            }
            None => which::which(program),
        };
        trace!("which {}: {:?}", program, found);
        found.ok()
    }

    fn version(&self, executable: &Path) -> Result<String, ProbeError> {
        let program = executable.display().to_string();
        debug!("Querying version: {} --version", program);

        let output = Command::new(executable)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ProbeError::Io {
                program: program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                program,
                code: output.status.code().unwrap_or(-1),
            });
        }

        parse_version_output(&String::from_utf8_lossy(&output.stdout))
            .ok_or(ProbeError::EmptyOutput { program })
    }
}

/// First non-empty line, trimmed
fn parse_version_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
