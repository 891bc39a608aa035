//! Presentation layer for fixcore
//!
//! This crate contains the CLI definition and the console status reporter.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::{ConsoleReporter, banner};
