//! Launch workflow use case
//!
//! Runs the whole pipeline for one invocation:
//!
//! ```text
//! Unvalidated → Validated → ToolsResolved → CommandBuilt → Running → {Succeeded, Failed}
//! ```
//!
//! Argument checks run first, then tool probing, then the input-data check,
//! so a missing engine is reported before any directory is scanned. Every
//! failure is terminal; nothing is retried.

use crate::config::PreflightConfig;
use crate::ports::executable_probe::ExecutableProbe;
use crate::ports::input_scanner::InputScanner;
use crate::ports::process_runner::ProcessRunner;
use crate::ports::reporter::Reporter;
use crate::use_cases::resolve_tools::ToolProbe;
use crate::use_cases::validate_input::InputValidator;
use fixcore_domain::{
    CommandBuilder, ConfigurationError, EnvironmentError, ExecutionError, InputDataError,
    InvocationCommand, LaunchArgs, LaunchOutcome, PipelineStage,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that end a launch run
#[derive(Error, Debug)]
pub enum LaunchWorkflowError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentError),

    #[error("Input data error: {0}")]
    InputData(#[from] InputDataError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

impl LaunchWorkflowError {
    /// Last stage reached before the failure
    pub fn stage(&self) -> PipelineStage {
        match self {
            LaunchWorkflowError::Configuration(_) => PipelineStage::Unvalidated,
            LaunchWorkflowError::Environment(_) => PipelineStage::Validated,
            LaunchWorkflowError::InputData(_) => PipelineStage::ToolsResolved,
            LaunchWorkflowError::Execution(_) => PipelineStage::Running,
        }
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Input for the LaunchWorkflow use case
#[derive(Debug, Clone)]
pub struct LaunchWorkflowInput {
    /// Raw arguments for this run
    pub args: LaunchArgs,
    /// Directory holding the workflow definitions; the engine runs there
    pub workflow_dir: PathBuf,
    /// Caller's working directory, base for relative paths
    pub caller_dir: PathBuf,
    /// Stop after building the command
    pub dry_run: bool,
}

impl LaunchWorkflowInput {
    pub fn new(
        args: LaunchArgs,
        workflow_dir: impl Into<PathBuf>,
        caller_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            args,
            workflow_dir: workflow_dir.into(),
            caller_dir: caller_dir.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a run that got past every preflight check
#[derive(Debug, Clone)]
pub struct LaunchWorkflowOutput {
    pub command: InvocationCommand,
    /// `None` for a dry run
    pub outcome: Option<LaunchOutcome>,
    /// `Succeeded`, or `CommandBuilt` when a dry run stopped early
    pub stage: PipelineStage,
}

/// Use case wiring validation, tool probing, command assembly and launch
pub struct LaunchWorkflowUseCase {
    validator: InputValidator,
    tools: ToolProbe,
    runner: Arc<dyn ProcessRunner>,
    config: PreflightConfig,
}

impl LaunchWorkflowUseCase {
    pub fn new(
        probe: Arc<dyn ExecutableProbe>,
        scanner: Arc<dyn InputScanner>,
        runner: Arc<dyn ProcessRunner>,
        config: PreflightConfig,
    ) -> Self {
        Self {
            validator: InputValidator::new(scanner),
            tools: ToolProbe::new(probe, config.engine.clone()),
            runner,
            config,
        }
    }

    /// Execute the pipeline, reporting the terminal error before returning it
    pub async fn execute(
        &self,
        input: LaunchWorkflowInput,
        reporter: &dyn Reporter,
    ) -> Result<LaunchWorkflowOutput, LaunchWorkflowError> {
        let result = self.run_stages(input, reporter).await;
        match &result {
            Ok(output) => debug!("Stage: {}", output.stage),
            Err(e) => {
                debug!("Stage: {} (after {})", PipelineStage::Failed, e.stage());
                reporter.error(&e.to_string());
            }
        }
        result
    }

    async fn run_stages(
        &self,
        input: LaunchWorkflowInput,
        reporter: &dyn Reporter,
    ) -> Result<LaunchWorkflowOutput, LaunchWorkflowError> {
        let request = self.validator.validate_arguments(input.args, reporter)?;
        debug!("Stage: {}", PipelineStage::Validated);

        let resolution = self.tools.resolve(request.use_container(), reporter)?;
        self.validator
            .check_input_data(request.input(), &self.config.input_extension, reporter)?;
        debug!("Stage: {}", PipelineStage::ToolsResolved);

        let command = CommandBuilder::new(
            self.config.engine.program.clone(),
            input.workflow_dir,
            input.caller_dir,
        )
        .build(&request, &resolution);
        debug!("Stage: {}", PipelineStage::CommandBuilt);

        reporter.info(&format!(
            "Launching workflow with the following command:\n{}",
            command.display_line()
        ));

        if input.dry_run {
            info!("Dry run, not launching");
            return Ok(LaunchWorkflowOutput {
                command,
                outcome: None,
                stage: PipelineStage::CommandBuilt,
            });
        }

        debug!("Stage: {}", PipelineStage::Running);
        let outcome = self.runner.run(&command).await?;
        if !outcome.succeeded {
            return Err(ExecutionError::NonZeroExit {
                code: outcome.exit_code,
            }
            .into());
        }

        info!("Workflow finished successfully");
        reporter.success("Workflow completed successfully");
        Ok(LaunchWorkflowOutput {
            command,
            outcome: Some(outcome),
            stage: PipelineStage::Succeeded,
        })
    }
}
