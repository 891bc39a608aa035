//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod launch_workflow;
pub mod resolve_tools;
pub mod validate_input;

#[cfg(test)]
pub(crate) mod test_support;
