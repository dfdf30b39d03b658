//! SHA3-256 hashing and the 32-byte hash type
//!
//! Every consensus identifier in EY (block ids, checkpoints, PoW seeds and
//! outputs) is a SHA3-256 digest.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use std::fmt;

/// Hash length in bytes
pub const HASH_LEN: usize = 32;

/// 32-byte hash output
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; HASH_LEN]);

impl Hash {
    /// Create a zero hash
    pub const fn zero() -> Self {
        Hash([0u8; HASH_LEN])
    }

    /// Create hash from bytes
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Hash(bytes)
    }

    /// Build a hash from four big-endian 64-bit words (`V0..V3`)
    pub const fn from_words(words: [u64; 4]) -> Self {
        let mut bytes = [0u8; HASH_LEN];
        let mut w = 0;
        while w < 4 {
            let be = words[w].to_be_bytes();
            let mut i = 0;
            while i < 8 {
                bytes[w * 8 + i] = be[i];
                i += 1;
            }
            w += 1;
        }
        Hash(bytes)
    }

    /// Split into four big-endian 64-bit words
    pub fn to_words(&self) -> [u64; 4] {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(8)) {
            let mut be = [0u8; 8];
            be.copy_from_slice(chunk);
            *word = u64::from_be_bytes(be);
        }
        words
    }

    /// Create hash from hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; HASH_LEN];
        hex::decode_to_slice(hex, &mut arr)?;
        Ok(Hash(arr))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_LEN]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[u8; HASH_LEN]> for Hash {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Hash(bytes)
    }
}

/// Hash arbitrary bytes using SHA3-256
pub fn sha3_256(data: &[u8]) -> Hash {
    sha3_256_concat(&[data])
}

/// Hash a sequence of byte slices as one message
pub fn sha3_256_concat(parts: &[&[u8]]) -> Hash {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&hasher.finalize());
    Hash(out)
}
