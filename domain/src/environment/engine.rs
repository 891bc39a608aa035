//! Workflow engine requirement

use crate::core::error::EnvironmentError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENGINE_PROGRAM: &str = "snakemake";
pub const DEFAULT_ENGINE_VERSION: &str = "8.20.5";

/// The workflow engine executable and the exact release it must be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRequirement {
    pub program: String,
    pub version: String,
}

impl Default for EngineRequirement {
    fn default() -> Self {
        Self {
            program: DEFAULT_ENGINE_PROGRAM.to_string(),
            version: DEFAULT_ENGINE_VERSION.to_string(),
        }
    }
}

impl EngineRequirement {
    pub fn new(program: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: version.into(),
        }
    }

    /// Exact string match against the reported version (surrounding whitespace ignored)
    pub fn check_version(&self, found: &str) -> Result<(), EnvironmentError> {
        let found = found.trim();
        if found == self.version {
            Ok(())
        } else {
            Err(EnvironmentError::VersionMismatch {
                program: self.program.clone(),
                expected: self.version.clone(),
                found: found.to_string(),
            })
        }
    }
}
