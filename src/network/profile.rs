//! Network profiles
//!
//! A profile is the full set of identifying constants of one deployment:
//! name, segwit address prefix, P2P port, DNS seeds and checkpoints.

use crate::network::checkpoint::{Checkpoint, MAINNET_CHECKPOINTS, TESTNET_CHECKPOINTS};
use crate::network::ParamsError;
use serde::{Deserialize, Serialize};

/// Config of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Human-readable identifier of the network
    pub name: String,
    /// Human-readable part of segwit addresses
    pub bech32_hrp_segwit: String,
    /// Default peer-to-peer port, absent for solo networks
    pub default_port: Option<String>,
    /// DNS seeds used as one method to discover peers
    pub dns_seeds: Vec<String>,
    /// Ascending by height
    pub checkpoints: Vec<Checkpoint>,
}

impl NetworkProfile {
    /// Config for production
    pub fn mainnet() -> Self {
        Self {
            name: "main".to_string(),
            bech32_hrp_segwit: "ey".to_string(),
            default_port: Some("46657".to_string()),
            dns_seeds: vec!["mainnetseed.eiyaro.org".to_string()],
            checkpoints: MAINNET_CHECKPOINTS.to_vec(),
        }
    }

    /// Config for the "wisdom" test network
    pub fn testnet() -> Self {
        Self {
            name: "test".to_string(),
            bech32_hrp_segwit: "ty".to_string(),
            default_port: Some("46656".to_string()),
            dns_seeds: vec!["testnetseed.eiyaro.org".to_string()],
            checkpoints: TESTNET_CHECKPOINTS.to_vec(),
        }
    }

    /// Config for a single local node
    pub fn solonet() -> Self {
        Self {
            name: "solo".to_string(),
            bech32_hrp_segwit: "sy".to_string(),
            default_port: None,
            dns_seeds: Vec::new(),
            checkpoints: Vec::new(),
        }
    }

    /// Check the profile's invariants: a non-empty address prefix and
    /// strictly ascending checkpoint heights
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.bech32_hrp_segwit.is_empty() {
            return Err(ParamsError::EmptyBech32Prefix(self.name.clone()));
        }
        for pair in self.checkpoints.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(ParamsError::UnorderedCheckpoints {
                    network: self.name.clone(),
                    previous: pair[0].height,
                    height: pair[1].height,
                });
            }
        }
        Ok(())
    }

    /// Checkpoint pinned at exactly `height`
    pub fn checkpoint_at(&self, height: u64) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|cp| cp.height == height)
    }

    /// Highest checkpoint at or below `height`
    pub fn last_checkpoint_at_or_below(&self, height: u64) -> Option<&Checkpoint> {
        self.checkpoints.iter().rev().find(|cp| cp.height <= height)
    }

    pub fn latest_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// DNS seeds joined with the default port (`host:port`)
    ///
    /// Resolution happens at connection time; these are not socket addresses.
    pub fn seed_endpoints(&self) -> Vec<String> {
        match &self.default_port {
            Some(port) => self
                .dns_seeds
                .iter()
                .map(|seed| format!("{}:{}", seed, port))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self::mainnet()
    }
}
