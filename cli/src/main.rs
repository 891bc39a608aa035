//! CLI entrypoint for fixcore
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use fixcore_application::{LaunchWorkflowInput, LaunchWorkflowUseCase, Reporter};
use fixcore_domain::PipelineStage;
use fixcore_infrastructure::{
    ChildProcessRunner, ConfigLoader, FileConfig, LocalInputScanner, PathExecutableProbe,
};
use fixcore_presentation::{Cli, ConsoleReporter, banner};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let reporter = ConsoleReporter::new().quiet(cli.quiet);

    match run(cli, &reporter).await {
        Ok(code) => code,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, reporter: &ConsoleReporter) -> Result<ExitCode> {
    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        let config = load_config(&cli)?;
        println!();
        println!("{}", ConfigLoader::render(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    if !cli.quiet {
        println!("{}", banner(env!("CARGO_PKG_VERSION")));
    }

    info!("Starting fixcore");

    let workflow_dir = match cli.workflow_dir.clone().or(config.workflow.dir.clone()) {
        Some(dir) => dir,
        None => executable_dir()?,
    };
    let caller_dir = std::env::current_dir().context("cannot determine the current directory")?;
    debug!(
        "Workflow directory: {}, caller directory: {}",
        workflow_dir.display(),
        caller_dir.display()
    );

    // === Dependency Injection ===
    let use_case = LaunchWorkflowUseCase::new(
        Arc::new(PathExecutableProbe::new()),
        Arc::new(LocalInputScanner::new()),
        Arc::new(ChildProcessRunner::new()),
        config.preflight(),
    );

    let input = LaunchWorkflowInput::new(cli.launch_args(), workflow_dir, caller_dir)
        .with_dry_run(cli.dry_run);

    match use_case.execute(input, reporter).await {
        Ok(output) => {
            if output.stage == PipelineStage::CommandBuilt && cli.quiet {
                println!("{}", output.command.display_line());
            }
            Ok(ExitCode::SUCCESS)
        }
        // Already reported by the use case
        Err(e) => Ok(ExitCode::from(e.exit_code() as u8)),
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Directory of the running executable, where the workflow definitions ship
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the fixcore executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("executable path has no parent directory")
}
