//! Native asset identity and definition

use crate::constants::{DECIMAL_PLACES, EY_ALIAS};
use crate::crypto::{sha3_256, Hash, HASH_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 32-byte asset identifier
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(pub [u8; HASH_LEN]);

/// EY's asset id, the soul asset of Eiyaro. All bits set.
///
/// Issued asset ids are SHA3-256 digests and never take this value.
pub const EY_ASSET_ID: AssetId = AssetId([0xff; HASH_LEN]);

impl AssetId {
    /// Whether this is the native currency
    pub fn is_native(&self) -> bool {
        *self == EY_ASSET_ID
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl From<Hash> for AssetId {
    fn from(hash: Hash) -> Self {
        AssetId(hash.0)
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self.to_hex())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Asset definition metadata
///
/// Fields are declared in lexical order so the JSON encoding has sorted keys,
/// which is what the definition hash commits to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDefinition {
    pub decimals: u8,
    pub description: String,
    pub name: String,
    pub symbol: String,
}

impl AssetDefinition {
    /// Definition of the native EY asset
    pub fn native() -> Self {
        Self {
            decimals: DECIMAL_PLACES,
            description: "Eiyaro Official Issue".to_string(),
            name: EY_ALIAS.to_string(),
            symbol: EY_ALIAS.to_string(),
        }
    }

    /// Canonical JSON encoding
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// SHA3-256 of the canonical JSON encoding
    pub fn definition_hash(&self) -> serde_json::Result<Hash> {
        Ok(sha3_256(&self.to_json()?))
    }
}
