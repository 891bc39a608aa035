//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod executable_probe;
pub mod input_scanner;
pub mod process_runner;
pub mod reporter;
