//! Application-level configuration.
//!
//! - [`PreflightConfig`]: engine pin and input extension checked before launch

pub mod preflight_config;

pub use preflight_config::PreflightConfig;
