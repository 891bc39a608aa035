//! Environment-management strategies
//!
//! The choice between container execution and a package-environment manager
//! (and, within the latter, fast vs. slow manager) is an ordered list of
//! candidates. Each candidate names the executables it needs and the engine
//! flag it contributes; the first candidate whose executables are all present
//! is selected.

use crate::core::error::EnvironmentError;
use serde::{Deserialize, Serialize};

/// The mechanism that provisions the workflow's runtime dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentManager {
    Apptainer,
    Mamba,
    Conda,
}

impl EnvironmentManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentManager::Apptainer => "apptainer",
            EnvironmentManager::Mamba => "mamba",
            EnvironmentManager::Conda => "conda",
        }
    }
}

impl std::fmt::Display for EnvironmentManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Container runtimes vs. package-environment managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentMode {
    Container,
    PackageManager,
}

impl EnvironmentMode {
    pub fn from_container_flag(use_container: bool) -> Self {
        if use_container {
            EnvironmentMode::Container
        } else {
            EnvironmentMode::PackageManager
        }
    }
}

/// One candidate in a priority list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentStrategy {
    manager: EnvironmentManager,
    requires: Vec<String>,
    flag: Vec<String>,
}

impl EnvironmentStrategy {
    pub fn new(
        manager: EnvironmentManager,
        requires: impl IntoIterator<Item = impl Into<String>>,
        flag: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            manager,
            requires: requires.into_iter().map(Into::into).collect(),
            flag: flag.into_iter().map(Into::into).collect(),
        }
    }

    /// Apptainer with its Singularity compatibility runtime
    pub fn apptainer() -> Self {
        Self::new(
            EnvironmentManager::Apptainer,
            ["apptainer", "singularity"],
            ["--sdm", "apptainer"],
        )
    }

    /// Mamba is the engine's default conda frontend, so no frontend option is needed
    pub fn mamba() -> Self {
        Self::new(EnvironmentManager::Mamba, ["mamba"], ["--use-conda"])
    }

    pub fn conda() -> Self {
        Self::new(
            EnvironmentManager::Conda,
            ["conda"],
            ["--use-conda", "--conda-frontend", "conda"],
        )
    }

    /// Required executables the predicate reports as absent
    pub fn missing(&self, is_available: impl Fn(&str) -> bool) -> Vec<String> {
        self.requires
            .iter()
            .filter(|exe| !is_available(exe.as_str()))
            .cloned()
            .collect()
    }

    pub fn is_available(&self, is_available: impl Fn(&str) -> bool) -> bool {
        self.requires.iter().all(|exe| is_available(exe.as_str()))
    }
}

/// Ordered candidate strategies for one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyList {
    mode: EnvironmentMode,
    candidates: Vec<EnvironmentStrategy>,
}

impl StrategyList {
    pub fn new(mode: EnvironmentMode, candidates: Vec<EnvironmentStrategy>) -> Self {
        Self { mode, candidates }
    }

    /// Built-in priority list for the requested mode
    pub fn for_mode(mode: EnvironmentMode) -> Self {
        match mode {
            EnvironmentMode::Container => Self::new(mode, vec![EnvironmentStrategy::apptainer()]),
            EnvironmentMode::PackageManager => Self::new(
                mode,
                vec![EnvironmentStrategy::mamba(), EnvironmentStrategy::conda()],
            ),
        }
    }

    /// Pick the first candidate whose executables are all present
    pub fn select(
        &self,
        is_available: impl Fn(&str) -> bool,
    ) -> Result<StrategySelection, EnvironmentError> {
        for (rank, candidate) in self.candidates.iter().enumerate() {
            if candidate.is_available(&is_available) {
                return Ok(StrategySelection {
                    resolution: ToolResolution {
                        manager: candidate.manager,
                        environment_flag: candidate.flag.clone(),
                    },
                    is_fallback: rank > 0,
                });
            }
        }

        Err(match self.mode {
            EnvironmentMode::Container => EnvironmentError::ContainerRuntimeMissing {
                missing: self
                    .candidates
                    .iter()
                    .flat_map(|c| c.missing(&is_available))
                    .collect(),
            },
            EnvironmentMode::PackageManager => EnvironmentError::PackageManagerMissing {
                candidates: self
                    .candidates
                    .iter()
                    .flat_map(|c| c.requires.iter().cloned())
                    .collect(),
            },
        })
    }
}

/// Selected strategy plus whether it was a lower-priority fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySelection {
    pub resolution: ToolResolution,
    pub is_fallback: bool,
}

/// Result of probing the environment, consumed once by the command builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResolution {
    manager: EnvironmentManager,
    environment_flag: Vec<String>,
}

impl ToolResolution {
    pub fn new(
        manager: EnvironmentManager,
        environment_flag: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            manager,
            environment_flag: environment_flag.into_iter().map(Into::into).collect(),
        }
    }

    pub fn manager(&self) -> EnvironmentManager {
        self.manager
    }

    /// Argument tokens selecting the environment strategy
    pub fn environment_flag(&self) -> &[String] {
        &self.environment_flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(names: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |exe| names.iter().any(|name| *name == exe)
    }

    // ==================== Container mode ====================

    #[test]
    fn container_requires_both_runtimes() {
        let list = StrategyList::for_mode(EnvironmentMode::Container);
        let selection = list.select(present(&["apptainer", "singularity"])).unwrap();
        assert_eq!(selection.resolution.manager(), EnvironmentManager::Apptainer);
        assert_eq!(selection.resolution.environment_flag(), ["--sdm", "apptainer"]);
        assert!(!selection.is_fallback);
    }

    #[test]
    fn container_missing_secondary_fails() {
        let list = StrategyList::for_mode(EnvironmentMode::Container);
        let err = list.select(present(&["apptainer"])).unwrap_err();
        assert_eq!(
            err,
            EnvironmentError::ContainerRuntimeMissing {
                missing: vec!["singularity".to_string()]
            }
        );
    }

    #[test]
    fn container_mode_ignores_package_managers() {
        let list = StrategyList::for_mode(EnvironmentMode::Container);
        assert!(list.select(present(&["mamba", "conda"])).is_err());
    }

    // ==================== Package-manager mode ====================

    #[test]
    fn mamba_preferred_when_both_present() {
        let list = StrategyList::for_mode(EnvironmentMode::PackageManager);
        let selection = list.select(present(&["mamba", "conda"])).unwrap();
        assert_eq!(selection.resolution.manager(), EnvironmentManager::Mamba);
        assert_eq!(selection.resolution.environment_flag(), ["--use-conda"]);
        assert!(!selection.is_fallback);
    }

    #[test]
    fn conda_fallback_adds_frontend() {
        let list = StrategyList::for_mode(EnvironmentMode::PackageManager);
        let selection = list.select(present(&["conda"])).unwrap();
        assert_eq!(selection.resolution.manager(), EnvironmentManager::Conda);
        assert_eq!(
            selection.resolution.environment_flag(),
            ["--use-conda", "--conda-frontend", "conda"]
        );
        assert!(selection.is_fallback);
    }

    #[test]
    fn no_package_manager_fails() {
        let list = StrategyList::for_mode(EnvironmentMode::PackageManager);
        let err = list.select(present(&["apptainer", "singularity"])).unwrap_err();
        assert_eq!(
            err,
            EnvironmentError::PackageManagerMissing {
                candidates: vec!["mamba".to_string(), "conda".to_string()]
            }
        );
    }

    #[test]
    fn extra_strategy_is_a_data_change() {
        let list = StrategyList::new(
            EnvironmentMode::Container,
            vec![
                EnvironmentStrategy::apptainer(),
                EnvironmentStrategy::new(
                    EnvironmentManager::Apptainer,
                    ["apptainer"],
                    ["--sdm", "apptainer"],
                ),
            ],
        );
        let selection = list.select(present(&["apptainer"])).unwrap();
        assert!(selection.is_fallback);
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(EnvironmentMode::from_container_flag(true), EnvironmentMode::Container);
        assert_eq!(
            EnvironmentMode::from_container_flag(false),
            EnvironmentMode::PackageManager
        );
    }
}
