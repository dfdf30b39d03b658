//! Network registry and the active profile
//!
//! The registry is filled once at startup. Activating a network yields an
//! `ActiveProfile`, an immutable shared handle that validators receive by
//! value instead of reading a global.

use crate::network::{NetworkProfile, ParamsError};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// Chain id of the production network
pub const MAINNET_ID: &str = "mainnet";
/// Chain id of the public test network
pub const TESTNET_ID: &str = "wisdom";
/// Chain id of the single-node development network
pub const SOLONET_ID: &str = "solonet";

/// Correspondence between chain id and network profile
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, NetworkProfile>,
}

impl ProfileRegistry {
    /// Registry with no networks
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Registry holding the three shipped networks
    pub fn with_defaults() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(MAINNET_ID.to_string(), NetworkProfile::mainnet());
        profiles.insert(TESTNET_ID.to_string(), NetworkProfile::testnet());
        profiles.insert(SOLONET_ID.to_string(), NetworkProfile::solonet());
        Self { profiles }
    }

    /// Add a network during initialization
    pub fn register(&mut self, id: impl Into<String>, profile: NetworkProfile) -> Result<(), ParamsError> {
        let id = id.into();
        if self.profiles.contains_key(&id) {
            return Err(ParamsError::DuplicateNetwork(id));
        }
        profile.validate()?;
        self.profiles.insert(id, profile);
        Ok(())
    }

    /// Look up a network by chain id
    pub fn lookup(&self, id: &str) -> Option<&NetworkProfile> {
        self.profiles.get(id)
    }

    /// Registered chain ids, sorted
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Select the network this process runs on
    pub fn activate(&self, id: &str) -> Result<ActiveProfile, ParamsError> {
        let profile = self
            .lookup(id)
            .ok_or_else(|| ParamsError::UnknownNetwork(id.to_string()))?;
        debug!(chain_id = id, name = %profile.name, "activated network profile");
        Ok(ActiveProfile {
            id: Arc::from(id),
            profile: Arc::new(profile.clone()),
        })
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// The network profile selected for this process
///
/// Cheap to clone and safe to share across validation threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProfile {
    id: Arc<str>,
    profile: Arc<NetworkProfile>,
}

impl ActiveProfile {
    /// Chain id this profile was activated under
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }
}

impl Default for ActiveProfile {
    fn default() -> Self {
        Self {
            id: Arc::from(MAINNET_ID),
            profile: Arc::new(NetworkProfile::mainnet()),
        }
    }
}

impl Deref for ActiveProfile {
    type Target = NetworkProfile;

    fn deref(&self) -> &NetworkProfile {
        &self.profile
    }
}

impl fmt::Display for ActiveProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.profile.name)
    }
}
