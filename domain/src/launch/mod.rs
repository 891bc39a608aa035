//! Launch request subdomain
//!
//! - [`pangenome_tool::PangenomeTool`]: closed set of pangenome tools
//! - [`request::LaunchArgs`] / [`request::LaunchRequest`]: raw and validated configuration
//! - [`outcome::LaunchOutcome`]: exit status of the external engine

pub mod outcome;
pub mod pangenome_tool;
pub mod request;
