//! Launch arguments and the validated launch request
//!
//! [`LaunchArgs`] is the raw, unchecked configuration for one run.
//! [`LaunchArgs::validate`] applies the argument-combination rules in order
//! and reports the first violation:
//!
//! 1. exactly one of genes / assemblies directory
//! 2. assemblies require a pangenome tool
//! 3. with a tool chosen, the threshold lies in `[0, 1]`
//! 4. at least one core
//!
//! The directory-content rule needs the filesystem and lives in the
//! application layer.

use super::pangenome_tool::PangenomeTool;
use crate::core::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CORES: u32 = 4;
pub const DEFAULT_PREFIX: &str = "fixcore_job";
pub const DEFAULT_OUTDIR: &str = "bdpp_output";
pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// Raw configuration for one invocation, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchArgs {
    pub cores: u32,
    pub genes_dir: Option<PathBuf>,
    pub assemblies_dir: Option<PathBuf>,
    pub prefix: String,
    pub outdir: PathBuf,
    pub pangenome_tool: PangenomeTool,
    pub threshold: f64,
    pub use_container: bool,
}

impl Default for LaunchArgs {
    fn default() -> Self {
        Self {
            cores: DEFAULT_CORES,
            genes_dir: None,
            assemblies_dir: None,
            prefix: DEFAULT_PREFIX.to_string(),
            outdir: PathBuf::from(DEFAULT_OUTDIR),
            pangenome_tool: PangenomeTool::None,
            threshold: DEFAULT_THRESHOLD,
            use_container: false,
        }
    }
}

impl LaunchArgs {
    // ==================== Builder Methods ====================

    pub fn with_cores(mut self, cores: u32) -> Self {
        self.cores = cores;
        self
    }

    pub fn with_genes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.genes_dir = Some(dir.into());
        self
    }

    pub fn with_assemblies_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assemblies_dir = Some(dir.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_outdir(mut self, outdir: impl Into<PathBuf>) -> Self {
        self.outdir = outdir.into();
        self
    }

    pub fn with_pangenome_tool(mut self, tool: PangenomeTool) -> Self {
        self.pangenome_tool = tool;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_container(mut self, use_container: bool) -> Self {
        self.use_container = use_container;
        self
    }

    // ==================== Validation ====================

    /// Check argument combinations and produce an immutable request
    pub fn validate(self) -> Result<LaunchRequest, ConfigurationError> {
        let input = match (self.genes_dir, self.assemblies_dir) {
            (None, None) => return Err(ConfigurationError::MissingInputDirectory),
            (Some(_), Some(_)) => return Err(ConfigurationError::ConflictingInputDirectories),
            (Some(genes), None) => InputSource::Genes(genes),
            (None, Some(assemblies)) => InputSource::Assemblies(assemblies),
        };

        if input.uses_assemblies() && !self.pangenome_tool.is_selected() {
            return Err(ConfigurationError::PangenomeToolRequired);
        }

        // Triggered by the tool choice alone, whichever directory is active.
        if self.pangenome_tool.is_selected() && !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigurationError::ThresholdOutOfRange(self.threshold));
        }

        if self.cores == 0 {
            return Err(ConfigurationError::InvalidCoreCount(self.cores));
        }

        Ok(LaunchRequest {
            cores: self.cores,
            input,
            prefix: self.prefix,
            outdir: self.outdir,
            pangenome_tool: self.pangenome_tool,
            threshold: self.threshold,
            use_container: self.use_container,
        })
    }
}

/// Which input directory role is active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum InputSource {
    /// Pre-computed gene alignments
    Genes(PathBuf),
    /// Genome assemblies to run through a pangenome tool first
    Assemblies(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &Path {
        match self {
            InputSource::Genes(path) | InputSource::Assemblies(path) => path,
        }
    }

    pub fn uses_assemblies(&self) -> bool {
        matches!(self, InputSource::Assemblies(_))
    }

    pub fn role(&self) -> &'static str {
        match self {
            InputSource::Genes(_) => "genes",
            InputSource::Assemblies(_) => "assemblies",
        }
    }
}

/// Validated configuration for one invocation (immutable once built)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRequest {
    cores: u32,
    input: InputSource,
    prefix: String,
    outdir: PathBuf,
    pangenome_tool: PangenomeTool,
    threshold: f64,
    use_container: bool,
}

impl LaunchRequest {
    pub fn cores(&self) -> u32 {
        self.cores
    }

    pub fn input(&self) -> &InputSource {
        &self.input
    }

    pub fn uses_assemblies(&self) -> bool {
        self.input.uses_assemblies()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    pub fn pangenome_tool(&self) -> PangenomeTool {
        self.pangenome_tool
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn use_container(&self) -> bool {
        self.use_container
    }

    /// The composite tool/threshold selection, present only for assemblies
    pub fn core_selection(&self) -> Option<CoreGenomeSelection> {
        match self.input {
            InputSource::Assemblies(_) => {
                CoreGenomeSelection::new(self.pangenome_tool, self.threshold)
            }
            InputSource::Genes(_) => None,
        }
    }
}

/// Pangenome tool and core-gene threshold, carried as one value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreGenomeSelection {
    tool: PangenomeTool,
    threshold: f64,
}

impl CoreGenomeSelection {
    /// Returns `None` when no tool is selected
    pub fn new(tool: PangenomeTool, threshold: f64) -> Option<Self> {
        tool.is_selected().then_some(Self { tool, threshold })
    }

    pub fn tool(&self) -> PangenomeTool {
        self.tool
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Map-like value understood by the workflow: `{TOOL: roary, THRESHOLD: 0.9}`
    pub fn to_config_value(&self) -> String {
        format!(
            "{{TOOL: {}, THRESHOLD: {}}}",
            self.tool,
            format_threshold(self.threshold)
        )
    }
}

/// Shortest decimal form that always keeps a fractional part (`1` → `1.0`)
fn format_threshold(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains('.') || !value.is_finite() {
        rendered
    } else {
        format!("{}.0", rendered)
    }
}
