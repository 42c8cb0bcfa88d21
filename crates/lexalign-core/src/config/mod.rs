pub mod alignment_config;
pub mod clustering_config;
pub mod defaults;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use alignment_config::AlignmentConfig;
pub use clustering_config::ClusteringConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{ConfigError, LexAlignError, LexAlignResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexAlignConfig {
    pub clustering: ClusteringConfig,
    pub alignment: AlignmentConfig,
    pub observability: ObservabilityConfig,
}

impl LexAlignConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_file(path: &Path) -> LexAlignResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LexAlignError::io(path.display().to_string(), e))?;
        Ok(Self::from_toml(&content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clustering.validate()?;
        self.alignment.validate()?;
        self.observability.validate()
    }
}
