//! Node configuration loaded from TOML

use crate::network::{ActiveProfile, ParamsError, ProfileRegistry, MAINNET_ID};
use crate::pow::{self, PowBackend, PowCapability};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Params(#[from] ParamsError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub pow: PowConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_chain_id")]
    pub chain_id: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowConfig {
    /// Request the accelerated kernel
    #[serde(default)]
    pub simd: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_chain_id() -> String {
    MAINNET_ID.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl NodeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Activate the configured chain id in `registry`
    pub fn active_profile(&self, registry: &ProfileRegistry) -> Result<ActiveProfile, ConfigError> {
        Ok(registry.activate(&self.chain.chain_id)?)
    }

    pub fn pow_capability(&self) -> PowCapability {
        if self.pow.simd {
            PowCapability::Accelerated
        } else {
            PowCapability::Reference
        }
    }

    pub fn pow_backend(&self) -> &'static dyn PowBackend {
        pow::backend(self.pow_capability())
    }
}
