//! Preflight parameters: what the environment and inputs must satisfy.
//!
//! [`PreflightConfig`] groups the static requirements checked before launch.
//! These come from configuration files, not from per-run arguments.

use fixcore_domain::EngineRequirement;
use serde::{Deserialize, Serialize};

/// Extension an input file must end with to count as usable data
pub const DEFAULT_INPUT_EXTENSION: &str = ".fasta";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreflightConfig {
    /// Workflow engine executable and pinned version
    pub engine: EngineRequirement,
    /// Required input file extension
    pub input_extension: String,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            engine: EngineRequirement::default(),
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
        }
    }
}

impl PreflightConfig {
    // ==================== Builder Methods ====================

    pub fn with_engine(mut self, engine: EngineRequirement) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_input_extension(mut self, extension: impl Into<String>) -> Self {
        self.input_extension = extension.into();
        self
    }
}
