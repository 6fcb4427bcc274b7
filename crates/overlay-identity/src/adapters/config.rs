use std::fs;
use std::path::Path;

use crate::domain::{ConfigError, IdentityConfig};
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider.
///
/// Useful for testing and embedding. For deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: IdentityConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified config.
    #[must_use]
    pub fn with_config(mut self, config: IdentityConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_identity_config(&self) -> IdentityConfig {
        self.config
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading
// ============================================================================

/// TOML-based configuration provider.
///
/// Missing sections and keys take their defaults. Values are validated on
/// load.
///
/// # Config File Format
///
/// ```toml
/// [address_space]
/// ring_bits = 24
///
/// [handicap]
/// tuning_factor = 256.0
/// publish_boost = 8.0
/// unobserved_reliability = 1.0
/// initial_reliability = 0.5
/// history_weight = 0.75
/// ```
#[derive(Debug, Clone)]
pub struct TomlConfigProvider {
    config: IdentityConfig,
}

impl TomlConfigProvider {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: IdentityConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn get_identity_config(&self) -> IdentityConfig {
        self.config
    }
}
