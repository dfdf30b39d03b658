//! Consensus checks built on the network parameters
//!
//! Pure functions used by the block validator. None of them touch chain
//! state; callers pass in what they have already looked up.

use crate::consensus::block_subsidy;
use crate::constants::{
    BLOCKS_PER_RETARGET, COINBASE_ARBITRARY_SIZE_LIMIT, COINBASE_PENDING_BLOCK_NUMBER,
    MAX_TIME_OFFSET_SECONDS, MEDIAN_TIME_BLOCKS, PAY_TO_WITNESS_PUBKEY_HASH_DATA_SIZE,
    PAY_TO_WITNESS_SCRIPT_HASH_DATA_SIZE,
};
use crate::crypto::Hash;
use crate::network::NetworkProfile;
use thiserror::Error;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Block {height} has hash {got}, checkpoint requires {expected}")]
    CheckpointMismatch { height: u64, expected: Hash, got: Hash },
    #[error("Reorganization from fork height {fork_height} crosses checkpoint at {checkpoint_height}")]
    ReorgBelowCheckpoint { fork_height: u64, checkpoint_height: u64 },
    #[error("Invalid coinbase amount: got {got}, max {max}")]
    InvalidCoinbaseAmount { got: u64, max: u64 },
    #[error("Coinbase arbitrary data is {len} bytes, limit is {limit}")]
    CoinbaseArbitraryTooLarge { len: usize, limit: usize },
    #[error("Coinbase from height {coinbase_height} is immature at height {spend_height}")]
    ImmatureCoinbase { coinbase_height: u64, spend_height: u64 },
    #[error("Block timestamp {timestamp} is not after median time past {median}")]
    TimestampTooOld { timestamp: u64, median: u64 },
    #[error("Block timestamp {timestamp} is too far ahead of local time {now}")]
    TimestampTooNew { timestamp: u64, now: u64 },
    #[error("Gas calculation failed")]
    GasCalculation,
    #[error("Block gas {used} exceeds limit {limit}")]
    BlockGasExceeded { used: u64, limit: u64 },
}

/// Check a block hash against the profile's checkpoint at that height
///
/// Heights without a checkpoint always pass.
pub fn verify_checkpoint(
    profile: &NetworkProfile,
    height: u64,
    hash: &Hash,
) -> Result<(), ValidationError> {
    match profile.checkpoint_at(height) {
        Some(cp) if cp.hash != *hash => Err(ValidationError::CheckpointMismatch {
            height,
            expected: cp.hash,
            got: *hash,
        }),
        _ => Ok(()),
    }
}

/// Reject a reorganization that would rewrite history below a checkpoint
/// the node has already passed
///
/// `fork_height` is the height of the last block shared by both branches.
pub fn check_reorg_depth(
    profile: &NetworkProfile,
    tip_height: u64,
    fork_height: u64,
) -> Result<(), ValidationError> {
    match profile.last_checkpoint_at_or_below(tip_height) {
        Some(cp) if fork_height < cp.height => Err(ValidationError::ReorgBelowCheckpoint {
            fork_height,
            checkpoint_height: cp.height,
        }),
        _ => Ok(()),
    }
}

/// Coinbase may claim at most the block subsidy plus the block's fees
pub fn check_coinbase_amount(height: u64, amount: u64, fees: u64) -> Result<(), ValidationError> {
    let max = block_subsidy(height).saturating_add(fees);
    if amount > max {
        return Err(ValidationError::InvalidCoinbaseAmount { got: amount, max });
    }
    Ok(())
}

pub fn check_coinbase_arbitrary(data: &[u8]) -> Result<(), ValidationError> {
    if data.len() > COINBASE_ARBITRARY_SIZE_LIMIT {
        return Err(ValidationError::CoinbaseArbitraryTooLarge {
            len: data.len(),
            limit: COINBASE_ARBITRARY_SIZE_LIMIT,
        });
    }
    Ok(())
}

/// Coinbase outputs become spendable `COINBASE_PENDING_BLOCK_NUMBER` blocks later
pub fn check_coinbase_maturity(coinbase_height: u64, spend_height: u64) -> Result<(), ValidationError> {
    if spend_height < coinbase_height.saturating_add(COINBASE_PENDING_BLOCK_NUMBER) {
        return Err(ValidationError::ImmatureCoinbase {
            coinbase_height,
            spend_height,
        });
    }
    Ok(())
}

/// Median of the last `MEDIAN_TIME_BLOCKS` timestamps
///
/// `timestamps` is ordered oldest first. Returns 0 for an empty slice.
pub fn median_time_past(timestamps: &[u64]) -> u64 {
    if timestamps.is_empty() {
        return 0;
    }
    let start = timestamps.len().saturating_sub(MEDIAN_TIME_BLOCKS);
    let mut window = timestamps[start..].to_vec();
    window.sort_unstable();
    window[window.len() / 2]
}

/// Block time must be after median time past and not too far in the future
pub fn check_block_time(timestamp: u64, median: u64, now: u64) -> Result<(), ValidationError> {
    if timestamp > now.saturating_add(MAX_TIME_OFFSET_SECONDS) {
        return Err(ValidationError::TimestampTooNew { timestamp, now });
    }
    if timestamp <= median {
        return Err(ValidationError::TimestampTooOld { timestamp, median });
    }
    Ok(())
}

/// Check if difficulty should be retargeted at this height
pub fn is_retarget_height(height: u64) -> bool {
    height > 0 && height % BLOCKS_PER_RETARGET == 0
}

/// Version 0 witness program kinds, by data length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessProgramKind {
    PayToPubKeyHash,
    PayToScriptHash,
}

impl WitnessProgramKind {
    pub fn from_data_len(len: usize) -> Option<Self> {
        match len {
            PAY_TO_WITNESS_PUBKEY_HASH_DATA_SIZE => Some(Self::PayToPubKeyHash),
            PAY_TO_WITNESS_SCRIPT_HASH_DATA_SIZE => Some(Self::PayToScriptHash),
            _ => None,
        }
    }

    pub fn data_len(&self) -> usize {
        match self {
            Self::PayToPubKeyHash => PAY_TO_WITNESS_PUBKEY_HASH_DATA_SIZE,
            Self::PayToScriptHash => PAY_TO_WITNESS_SCRIPT_HASH_DATA_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BASE_SUBSIDY, INITIAL_BLOCK_SUBSIDY};
    use crate::network::Checkpoint;

    fn profile_with_checkpoints(heights: &[u64]) -> NetworkProfile {
        let mut profile = NetworkProfile::solonet();
        profile.checkpoints = heights
            .iter()
            .map(|&height| Checkpoint::new(height, Hash([height as u8; 32])))
            .collect();
        profile
    }

    #[test]
    fn test_checkpoint_match_and_mismatch() {
        let profile = profile_with_checkpoints(&[10, 20]);
        assert!(verify_checkpoint(&profile, 10, &Hash([10; 32])).is_ok());
        assert_eq!(
            verify_checkpoint(&profile, 20, &Hash::zero()),
            Err(ValidationError::CheckpointMismatch {
                height: 20,
                expected: Hash([20; 32]),
                got: Hash::zero(),
            })
        );
        // No checkpoint at 15
        assert!(verify_checkpoint(&profile, 15, &Hash::zero()).is_ok());
    }

    #[test]
    fn test_reorg_depth() {
        let profile = profile_with_checkpoints(&[10, 20]);
        // Tip at 25 has passed checkpoint 20
        assert!(check_reorg_depth(&profile, 25, 20).is_ok());
        assert!(check_reorg_depth(&profile, 25, 22).is_ok());
        assert_eq!(
            check_reorg_depth(&profile, 25, 19),
            Err(ValidationError::ReorgBelowCheckpoint {
                fork_height: 19,
                checkpoint_height: 20,
            })
        );
        // Below every checkpoint, nothing is pinned yet
        assert!(check_reorg_depth(&profile, 9, 0).is_ok());
    }

    #[test]
    fn test_coinbase_amount() {
        assert!(check_coinbase_amount(0, INITIAL_BLOCK_SUBSIDY, 0).is_ok());
        assert!(check_coinbase_amount(1, BASE_SUBSIDY + 500, 500).is_ok());
        assert!(check_coinbase_amount(1, BASE_SUBSIDY + 501, 500).is_err());
    }

    #[test]
    fn test_coinbase_arbitrary_limit() {
        assert!(check_coinbase_arbitrary(&[0u8; COINBASE_ARBITRARY_SIZE_LIMIT]).is_ok());
        assert!(check_coinbase_arbitrary(&[0u8; COINBASE_ARBITRARY_SIZE_LIMIT + 1]).is_err());
    }

    #[test]
    fn test_coinbase_maturity() {
        assert!(check_coinbase_maturity(100, 149).is_err());
        assert!(check_coinbase_maturity(100, 150).is_ok());
    }

    #[test]
    fn test_median_time_past_uses_last_window() {
        assert_eq!(median_time_past(&[]), 0);
        assert_eq!(median_time_past(&[5]), 5);
        // Only the last 8 count: 3..=10, sorted, index 4 -> 7
        let timestamps: Vec<u64> = (1..=10).collect();
        assert_eq!(median_time_past(&timestamps), 7);
        assert_eq!(median_time_past(&[9, 1, 5]), 5);
    }

    #[test]
    fn test_median_time_past_empty_and_short_history() {
        assert_eq!(median_time_past(&[]), 0);
        assert_eq!(median_time_past(&[u64::MAX]), u64::MAX);
        assert_eq!(median_time_past(&[4, 2]), 4);
    }

    #[test]
    fn test_block_time_bounds() {
        let now = 1_000_000;
        assert!(check_block_time(now, now - 100, now).is_ok());
        assert!(check_block_time(now + MAX_TIME_OFFSET_SECONDS, 0, now).is_ok());
        assert!(check_block_time(now + MAX_TIME_OFFSET_SECONDS + 1, 0, now).is_err());
        assert!(check_block_time(500, 500, now).is_err());
    }

    #[test]
    fn test_retarget_height() {
        assert!(!is_retarget_height(0));
        assert!(!is_retarget_height(1));
        assert!(is_retarget_height(BLOCKS_PER_RETARGET));
        assert!(is_retarget_height(BLOCKS_PER_RETARGET * 2));
    }

    #[test]
    fn test_witness_program_kind() {
        assert_eq!(WitnessProgramKind::from_data_len(20), Some(WitnessProgramKind::PayToPubKeyHash));
        assert_eq!(WitnessProgramKind::from_data_len(32), Some(WitnessProgramKind::PayToScriptHash));
        assert_eq!(WitnessProgramKind::from_data_len(21), None);
        assert_eq!(WitnessProgramKind::PayToScriptHash.data_len(), 32);
    }
}
