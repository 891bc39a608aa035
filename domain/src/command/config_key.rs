//! Workflow configuration keys
//!
//! Keys understood by the workflow definitions, passed to the engine as
//! `KEY=value` pairs after `--config`.

/// A key in the engine's `--config` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Directory of genome assemblies (assemblies mode)
    GenomesDir,
    /// Directory of gene alignments (genes mode)
    GenesDir,
    OutDir,
    Prefix,
    /// Composite `{TOOL: .., THRESHOLD: ..}` value (assemblies mode)
    Core,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::GenomesDir => "GENOMES_DIR",
            ConfigKey::GenesDir => "GENES_DIR",
            ConfigKey::OutDir => "OUTDIR",
            ConfigKey::Prefix => "PREFIX",
            ConfigKey::Core => "CORE",
        }
    }

    /// Render a `KEY=value` pair
    pub fn pair(&self, value: impl std::fmt::Display) -> String {
        format!("{}={}", self.as_str(), value)
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
