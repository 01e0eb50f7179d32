//! extfn-configs
//!
//! Configuration types and loader for the extension function registry.

pub mod config;

pub use config::defaults;
pub use config::*;
