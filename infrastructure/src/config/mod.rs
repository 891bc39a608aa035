//! Configuration file loading for fixcore
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FIXCORE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./fixcore.toml` or `./.fixcore.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/fixcore/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEngineConfig, FileInputConfig, FileWorkflowConfig,
};
pub use loader::ConfigLoader;
