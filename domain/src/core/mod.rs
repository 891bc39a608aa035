//! Core domain concepts shared across all subdomains.
//!
//! - [`error`]: the failure taxonomy (configuration, input data, environment, execution)
//! - [`stage`]: the pipeline state machine

pub mod error;
pub mod stage;
