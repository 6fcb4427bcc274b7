//! Identity layer configuration.

use serde::{Deserialize, Serialize};

use crate::domain::address_space::AddressSpaceConfig;
use crate::domain::errors::ConfigError;
use crate::domain::handicap::HandicapConfig;

/// Everything the identity layer can be tuned with.
///
/// Each section falls back to its defaults when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub address_space: AddressSpaceConfig,
    pub handicap: HandicapConfig,
}

impl IdentityConfig {
    /// 8-bit ring and round handicap numbers.
    pub fn for_testing() -> Self {
        Self {
            address_space: AddressSpaceConfig::for_testing(),
            handicap: HandicapConfig::for_testing(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.address_space.validate()?;
        self.handicap.validate()
    }
}
