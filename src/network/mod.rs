//! Network module - Profiles, checkpoints, registry and address prefixes

mod address;
pub mod checkpoint;
mod profile;
mod registry;

pub use address::*;
pub use checkpoint::Checkpoint;
pub use profile::*;
pub use registry::*;

use thiserror::Error;

/// Network parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Network already registered: {0}")]
    DuplicateNetwork(String),
    #[error("Network {0} has an empty bech32 prefix")]
    EmptyBech32Prefix(String),
    #[error("Network {network}: checkpoint {height} does not follow {previous}")]
    UnorderedCheckpoints {
        network: String,
        previous: u64,
        height: u64,
    },
}
