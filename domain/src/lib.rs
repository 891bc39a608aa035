//! Domain layer for fixcore
//!
//! This crate contains the launch request model, the environment strategy
//! lists and the engine command assembly. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Launch request
//!
//! Raw [`LaunchArgs`] are validated into an immutable [`LaunchRequest`]:
//! exactly one input directory (genes or assemblies), a pangenome tool when
//! assemblies are given, and a threshold in `[0, 1]` whenever a tool is chosen.
//!
//! ## Environment strategies
//!
//! The workflow's dependencies are provisioned either with containers
//! (Apptainer) or a package-environment manager (Mamba, falling back to Conda).
//! Both are ordered [`StrategyList`]s; the first available candidate wins.
//!
//! ## Invocation
//!
//! [`CommandBuilder`] turns a request and a [`ToolResolution`] into an
//! [`InvocationCommand`]: an argument vector plus the workflow directory it
//! must run from.

pub mod command;
pub mod core;
pub mod environment;
pub mod launch;
pub mod report;

// Re-export commonly used types
pub use command::{builder::CommandBuilder, config_key::ConfigKey, invocation::InvocationCommand};
pub use self::core::{
    error::{ConfigurationError, EnvironmentError, ExecutionError, InputDataError},
    stage::PipelineStage,
};
pub use environment::{
    engine::EngineRequirement,
    strategy::{
        EnvironmentManager, EnvironmentMode, EnvironmentStrategy, StrategyList, StrategySelection,
        ToolResolution,
    },
};
pub use launch::{
    outcome::LaunchOutcome,
    pangenome_tool::PangenomeTool,
    request::{CoreGenomeSelection, InputSource, LaunchArgs, LaunchRequest},
};
pub use report::{StatusEvent, StatusKind};
