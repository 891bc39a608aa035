//! Search-path tool discovery

mod discovery;

pub use discovery::PathExecutableProbe;
