use serde::{Deserialize, Serialize};

use crate::innerlude::ConfigError;

/// The environment variable [`RuntimeConfig::from_env`] reads.
pub const RUNTIME_CONFIG_ENV: &str = "VDOM_RUNTIME_CONFIG";

/// Settings for a [`crate::Runtime`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// How torn-down components are kept for reuse
    pub recycling: RecyclingConfig,
}

/// Settings for the component recycle pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecyclingConfig {
    /// Whether torn-down components are pooled at all
    pub enabled: bool,

    /// How many components are kept for each name and key
    pub capacity: usize,
}

impl Default for RecyclingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: 64,
        }
    }
}

impl RuntimeConfig {
    /// Turn recycling on, keeping up to `capacity` components per name and key
    pub fn with_recycling(mut self, capacity: usize) -> Self {
        self.recycling = RecyclingConfig {
            enabled: true,
            capacity,
        };
        self
    }

    /// Load the config a host process passed down through [`RUNTIME_CONFIG_ENV`].
    ///
    /// Returns `Ok(None)` if the variable isn't set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var(RUNTIME_CONFIG_ENV) {
            Ok(raw) => Self::from_json(&raw).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Invalid {
            var: RUNTIME_CONFIG_ENV,
            source,
        })
    }
}
