//! Runtime environment subdomain
//!
//! - [`engine::EngineRequirement`]: the pinned workflow engine
//! - [`strategy::StrategyList`]: container / package-manager priority lists
//! - [`strategy::ToolResolution`]: the selected strategy and its engine flag

pub mod engine;
pub mod strategy;
