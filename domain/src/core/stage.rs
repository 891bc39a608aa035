//! Pipeline stages
//!
//! `Unvalidated → Validated → ToolsResolved → CommandBuilt → Running → {Succeeded, Failed}`

/// A stage of a single launch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Raw arguments, nothing checked yet
    Unvalidated,
    /// Argument combinations accepted
    Validated,
    /// Engine and environment manager located
    ToolsResolved,
    /// Invocation assembled
    CommandBuilt,
    /// External engine running
    Running,
    Succeeded,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &str {
        match self {
            PipelineStage::Unvalidated => "unvalidated",
            PipelineStage::Validated => "validated",
            PipelineStage::ToolsResolved => "tools_resolved",
            PipelineStage::CommandBuilt => "command_built",
            PipelineStage::Running => "running",
            PipelineStage::Succeeded => "succeeded",
            PipelineStage::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
