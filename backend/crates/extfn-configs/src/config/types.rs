use super::defaults::*;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Extension function registry configuration
///
/// ```toml
/// [validation]
/// strict_pointer_args = true
/// allow_duplicate_overloads = false
///
/// [logging]
/// level = "debug"
/// target = "extfn::registry"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Signature checks applied at registration time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Reject row functions whose pointer argument is last or followed by another pointer
    #[serde(default = "default_strict_pointer_args")]
    pub strict_pointer_args: bool,

    /// Allow registering the same argument list twice under one name
    #[serde(default = "default_allow_duplicate_overloads")]
    pub allow_duplicate_overloads: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            strict_pointer_args: default_strict_pointer_args(),
            allow_duplicate_overloads: default_allow_duplicate_overloads(),
        }
    }
}

/// Diagnostic logging for the registry (never affects registration results)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `log` target the registry writes under
    #[serde(default = "default_log_target")]
    pub target: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            target: default_log_target(),
        }
    }
}

impl LoggingSettings {
    /// Parsed `level`; `validate()` guarantees it is one of the known names.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}
