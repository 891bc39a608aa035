//! Engine command subdomain
//!
//! - [`config_key::ConfigKey`]: keys of the `--config` block
//! - [`builder::CommandBuilder`]: assembles the invocation for a validated request
//! - [`invocation::InvocationCommand`]: program, argument vector and working directory

pub mod builder;
pub mod config_key;
pub mod invocation;
