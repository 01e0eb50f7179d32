pub mod defaults;
pub mod loader;
pub mod types;

pub use types::{LoggingSettings, RegistryConfig, ValidationSettings};
