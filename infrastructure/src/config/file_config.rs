//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [engine]
//! program = "snakemake"
//! version = "8.20.5"
//!
//! [input]
//! extension = ".fasta"
//!
//! [workflow]
//! dir = "/opt/fixcore/workflow"
//! ```

use fixcore_application::PreflightConfig;
use fixcore_domain::EngineRequirement;
use fixcore_domain::environment::engine::{DEFAULT_ENGINE_PROGRAM, DEFAULT_ENGINE_VERSION};
use fixcore_application::config::preflight_config::DEFAULT_INPUT_EXTENSION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("engine.program cannot be empty")]
    EmptyEngineProgram,

    #[error("engine.version cannot be empty")]
    EmptyEngineVersion,

    #[error("input.extension cannot be empty")]
    EmptyInputExtension,
}

/// Raw workflow engine configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Engine executable looked up on the search path
    pub program: String,
    /// Exact version the engine must report
    pub version: String,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_ENGINE_PROGRAM.to_string(),
            version: DEFAULT_ENGINE_VERSION.to_string(),
        }
    }
}

/// Raw input configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// Extension an input file must end with
    pub extension: String,
}

impl Default for FileInputConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_INPUT_EXTENSION.to_string(),
        }
    }
}

/// Raw workflow location configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkflowConfig {
    /// Workflow definitions directory (defaults to the executable's directory)
    pub dir: Option<PathBuf>,
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub engine: FileEngineConfig,
    pub input: FileInputConfig,
    pub workflow: FileWorkflowConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.engine.program.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEngineProgram);
        }
        if self.engine.version.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEngineVersion);
        }
        if self.input.extension.is_empty() {
            return Err(ConfigValidationError::EmptyInputExtension);
        }
        Ok(())
    }

    /// Application-level preflight requirements
    pub fn preflight(&self) -> PreflightConfig {
        PreflightConfig::default()
            .with_engine(EngineRequirement::new(
                self.engine.program.trim(),
                self.engine.version.trim(),
            ))
            .with_input_extension(self.input.extension.clone())
    }
}
