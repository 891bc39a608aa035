//! Child process runner for the workflow engine
//!
//! The engine's own log output streams straight to the terminal: stdin,
//! stdout and stderr are inherited, nothing is captured. No timeout is applied.

use async_trait::async_trait;
use fixcore_application::ProcessRunner;
use fixcore_domain::{ExecutionError, InvocationCommand, LaunchOutcome};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Runs the engine as a direct child (argument vector, no shell)
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildProcessRunner;

impl ChildProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for ChildProcessRunner {
    async fn run(&self, command: &InvocationCommand) -> Result<LaunchOutcome, ExecutionError> {
        debug!(
            "Spawning {} {:?} in {}",
            command.program(),
            command.args(),
            command.working_dir().display()
        );

        let mut cmd = Command::new(command.program());
        cmd.args(command.args())
            .current_dir(command.working_dir())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Linux: request kernel to send SIGTERM to child when parent dies.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        let status = cmd
            .status()
            .await
            .map_err(|source| ExecutionError::SpawnFailed {
                program: command.program().to_string(),
                source,
            })?;

        let outcome = LaunchOutcome::from_exit_code(status.code());
        info!("{} exited with status {}", command.program(), outcome.exit_code);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str, dir: &std::path::Path) -> InvocationCommand {
        InvocationCommand::new("sh", vec!["-c".to_string(), script.to_string()], dir)
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = ChildProcessRunner::new()
            .run(&sh("exit 0", dir.path()))
            .await
            .unwrap();
        assert!(outcome.succeeded);
        assert_eq!(outcome.exit_code, 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = ChildProcessRunner::new()
            .run(&sh("exit 7", dir.path()))
            .await
            .unwrap();
        assert!(!outcome.succeeded);
        assert_eq!(outcome.exit_code, 7);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        ChildProcessRunner::new()
            .run(&sh("touch marker", dir.path()))
            .await
            .unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_arguments_are_not_shell_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InvocationCommand::new(
            "touch",
            vec!["a b; touch injected".to_string()],
            dir.path(),
        );
        let outcome = ChildProcessRunner::new().run(&cmd).await.unwrap();
        assert!(outcome.succeeded);
        assert!(dir.path().join("a b; touch injected").exists());
        assert!(!dir.path().join("injected").exists());
    }

    #[tokio::test]
    async fn test_missing_program_fails_to_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InvocationCommand::new("definitely_not_a_command_123xyz", vec![], dir.path());
        let err = ChildProcessRunner::new().run(&cmd).await.unwrap_err();
        assert!(matches!(err, ExecutionError::SpawnFailed { .. }));
    }
}
