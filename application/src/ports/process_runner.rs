//! Process runner port
//!
//! Executes the assembled engine call and waits for it to finish.

use async_trait::async_trait;
use fixcore_domain::{ExecutionError, InvocationCommand, LaunchOutcome};

/// Port for running the external engine
///
/// Implementations inherit the current environment and standard streams
/// and block until the child exits. A non-zero exit is an `Ok` outcome;
/// only a failure to start is an error.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &InvocationCommand) -> Result<LaunchOutcome, ExecutionError>;
}
