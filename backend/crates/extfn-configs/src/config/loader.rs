use super::types::RegistryConfig;
use std::fs;
use std::path::Path;

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl RegistryConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: RegistryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        if self.logging.target.trim().is_empty() {
            return Err(anyhow::anyhow!("logging.target cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_default_config_is_valid() {
        let config = RegistryConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.validation.strict_pointer_args);
        assert!(!config.validation.allow_duplicate_overloads);
        assert_eq!(config.logging.target, "extfn::registry");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [validation]
            strict_pointer_args = false

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert!(!config.validation.strict_pointer_args);
        assert!(!config.validation.allow_duplicate_overloads);
        assert_eq!(config.logging.level_filter(), LevelFilter::Debug);
        assert_eq!(config.logging.target, "extfn::registry");
    }

    #[test]
    fn test_invalid_log_level() {
        let result = RegistryConfig::from_toml_str("[logging]\nlevel = \"verbose\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid log level 'verbose'"), "{}", err);
    }

    #[test]
    fn test_empty_log_target() {
        let mut config = RegistryConfig::default();
        config.logging.target = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = RegistryConfig::from_toml_str("[validation\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
