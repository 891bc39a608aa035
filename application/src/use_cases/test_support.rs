//! In-memory port fakes shared by the use case tests

use crate::ports::executable_probe::{ExecutableProbe, ProbeError};
use crate::ports::input_scanner::{InputScanner, ScanError};
use crate::ports::process_runner::ProcessRunner;
use async_trait::async_trait;
use fixcore_domain::{ExecutionError, InvocationCommand, LaunchOutcome};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-memory directory listing
#[derive(Default)]
pub(crate) struct FakeScanner {
    dirs: HashMap<PathBuf, Vec<String>>,
    calls: Mutex<usize>,
}

impl FakeScanner {
    pub(crate) fn with_dir(mut self, dir: &str, files: &[&str]) -> Self {
        self.dirs.insert(
            PathBuf::from(dir),
            files.iter().map(|f| f.to_string()).collect(),
        );
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl InputScanner for FakeScanner {
    fn matching_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
        *self.calls.lock().unwrap() += 1;
        let files = self.dirs.get(dir).ok_or(ScanError::NotADirectory)?;
        Ok(files
            .iter()
            .filter(|f| f.ends_with(extension))
            .map(|f| dir.join(f))
            .collect())
    }
}

/// Search path with a fixed set of programs under `/usr/bin`
#[derive(Default)]
pub(crate) struct FakeProbe {
    programs: Vec<String>,
    version: Option<String>,
    calls: Mutex<usize>,
}

impl FakeProbe {
    pub(crate) fn with_programs(mut self, programs: &[&str]) -> Self {
        self.programs = programs.iter().map(|p| p.to_string()).collect();
        self
    }

    pub(crate) fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ExecutableProbe for FakeProbe {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        *self.calls.lock().unwrap() += 1;
        self.programs
            .iter()
            .any(|p| p == program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }

    fn version(&self, executable: &Path) -> Result<String, ProbeError> {
        self.version.clone().ok_or_else(|| ProbeError::Failed {
            program: executable.display().to_string(),
            code: 1,
        })
    }
}

/// Records commands instead of running them
pub(crate) struct FakeRunner {
    exit_code: Option<i32>,
    spawn_fails: bool,
    commands: Mutex<Vec<InvocationCommand>>,
}

impl FakeRunner {
    pub(crate) fn exiting_with(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            spawn_fails: false,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_to_spawn() -> Self {
        Self {
            exit_code: None,
            spawn_fails: true,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn commands(&self) -> Vec<InvocationCommand> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn run(&self, command: &InvocationCommand) -> Result<LaunchOutcome, ExecutionError> {
        self.commands.lock().unwrap().push(command.clone());
        if self.spawn_fails {
            return Err(ExecutionError::SpawnFailed {
                program: command.program().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        Ok(LaunchOutcome::from_exit_code(self.exit_code))
    }
}
