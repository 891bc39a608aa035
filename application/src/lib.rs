//! Application layer for fixcore
//!
//! This crate contains use cases, port definitions, and preflight configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PreflightConfig;
pub use ports::{
    executable_probe::{ExecutableProbe, ProbeError},
    input_scanner::{InputScanner, ScanError},
    process_runner::ProcessRunner,
    reporter::{NoReport, RecordingReporter, Reporter},
};
pub use use_cases::launch_workflow::{
    LaunchWorkflowError, LaunchWorkflowInput, LaunchWorkflowOutput, LaunchWorkflowUseCase,
};
pub use use_cases::resolve_tools::ToolProbe;
pub use use_cases::validate_input::InputValidator;
