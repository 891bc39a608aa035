//! Domain error types
//!
//! One enum per failure family. Every variant names the offending value
//! (path, version string, exit code) so the message can be shown as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Mutually-exclusive or co-required argument violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("You must provide either a genes directory or an assemblies directory")]
    MissingInputDirectory,

    #[error("You cannot provide both a genes directory and an assemblies directory")]
    ConflictingInputDirectories,

    #[error("You must specify a pangenome tool when providing assemblies")]
    PangenomeToolRequired,

    #[error("Threshold must be between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("Number of cores must be a positive integer, got {0}")]
    InvalidCoreCount(u32),

    #[error("Unknown pangenome tool '{0}' (expected one of: none, roary, panaroo, panacota)")]
    UnknownPangenomeTool(String),
}

/// Declared input directory is missing or holds no usable data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputDataError {
    #[error("Directory '{}' does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("No files with extension '{extension}' found in directory '{}'", path.display())]
    NoMatchingFiles { path: PathBuf, extension: String },

    #[error("Directory '{}' could not be read: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },
}

/// Missing or mis-versioned executables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("{program} is not installed or not found in PATH")]
    EngineNotFound { program: String },

    #[error("{program} version {expected} is required, but version {found} is installed")]
    VersionMismatch {
        program: String,
        expected: String,
        found: String,
    },

    #[error("Could not determine the installed {program} version: {reason}")]
    VersionUnavailable { program: String, reason: String },

    #[error("Container runtime not found in PATH (missing: {})", missing.join(", "))]
    ContainerRuntimeMissing { missing: Vec<String> },

    #[error("No package environment manager found in PATH (looked for: {})", candidates.join(", "))]
    PackageManagerMissing { candidates: Vec<String> },
}

/// The external engine could not be started or exited unsuccessfully
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Workflow exited with status {code}")]
    NonZeroExit { code: i32 },
}

impl ExecutionError {
    /// Exit status reported by the child, if it ran at all
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecutionError::NonZeroExit { code } => Some(*code),
            ExecutionError::SpawnFailed { .. } => None,
        }
    }
}
