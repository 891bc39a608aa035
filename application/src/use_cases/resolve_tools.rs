//! Tool resolution use case
//!
//! Confirms the workflow engine is installed at the pinned version and picks
//! an environment-management strategy from the matching priority list.

use crate::ports::executable_probe::ExecutableProbe;
use crate::ports::reporter::Reporter;
use fixcore_domain::{
    EngineRequirement, EnvironmentError, EnvironmentMode, StrategyList, ToolResolution,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Probes the search path for the engine and environment tooling
pub struct ToolProbe {
    probe: Arc<dyn ExecutableProbe>,
    engine: EngineRequirement,
}

impl ToolProbe {
    pub fn new(probe: Arc<dyn ExecutableProbe>, engine: EngineRequirement) -> Self {
        Self { probe, engine }
    }

    pub fn resolve(
        &self,
        use_container: bool,
        reporter: &dyn Reporter,
    ) -> Result<ToolResolution, EnvironmentError> {
        reporter.info("Checking required tools...");
        self.check_engine(reporter)?;

        let strategies = StrategyList::for_mode(EnvironmentMode::from_container_flag(use_container));
        self.select_strategy(&strategies, reporter)
    }

    /// Engine present on the search path and at the pinned version
    fn check_engine(&self, reporter: &dyn Reporter) -> Result<(), EnvironmentError> {
        let program = &self.engine.program;
        let executable =
            self.probe
                .locate(program)
                .ok_or_else(|| EnvironmentError::EngineNotFound {
                    program: program.clone(),
                })?;
        debug!("Found {} at {}", program, executable.display());

        let found = self.probe.version(&executable).map_err(|e| {
            EnvironmentError::VersionUnavailable {
                program: program.clone(),
                reason: e.to_string(),
            }
        })?;
        self.engine.check_version(&found)?;

        info!("{} {} found at {}", program, self.engine.version, executable.display());
        reporter.success(&format!("{} {} found", program, self.engine.version));
        Ok(())
    }

    /// First available strategy of the list
    pub fn select_strategy(
        &self,
        strategies: &StrategyList,
        reporter: &dyn Reporter,
    ) -> Result<ToolResolution, EnvironmentError> {
        let selection = strategies.select(|exe| self.probe.is_available(exe))?;
        let manager = selection.resolution.manager();

        if selection.is_fallback {
            warn!("Falling back to {}", manager);
            reporter.warning(&format!(
                "Using {} to manage workflow environments (preferred manager not found)",
                manager
            ));
        } else {
            info!("Using {}", manager);
            reporter.info(&format!("Using {} to manage workflow environments", manager));
        }

        Ok(selection.resolution)
    }
}
