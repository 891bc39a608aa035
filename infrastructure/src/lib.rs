//! Infrastructure layer for fixcore
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod input;
pub mod process;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use input::LocalInputScanner;
pub use process::ChildProcessRunner;
pub use tools::PathExecutableProbe;
