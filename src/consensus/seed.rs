//! Proof-of-work seed rotation
//!
//! The seed fed to the PoW backend changes once every `SEED_PER_RETARGET`
//! blocks, to the hash of the block closing the previous window.

use crate::constants::{INITIAL_SEED, SEED_PER_RETARGET};
use crate::crypto::Hash;

/// Seed for the block following `prev_height`
pub fn calc_next_seed(prev_height: u64, prev_hash: &Hash, prev_seed: &Hash) -> Hash {
    if prev_height == 0 {
        return INITIAL_SEED;
    }
    if prev_height % SEED_PER_RETARGET == SEED_PER_RETARGET - 1 {
        return *prev_hash;
    }
    *prev_seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_after_genesis() {
        let prev = Hash([7; 32]);
        assert_eq!(calc_next_seed(0, &prev, &Hash::zero()), INITIAL_SEED);
    }

    #[test]
    fn test_seed_carries_within_window() {
        let prev = Hash([7; 32]);
        let seed = Hash([9; 32]);
        assert_eq!(calc_next_seed(1, &prev, &seed), seed);
        assert_eq!(calc_next_seed(SEED_PER_RETARGET - 2, &prev, &seed), seed);
    }

    #[test]
    fn test_seed_rotates_at_window_end() {
        let prev = Hash([7; 32]);
        let seed = Hash([9; 32]);
        assert_eq!(calc_next_seed(SEED_PER_RETARGET - 1, &prev, &seed), prev);
        assert_eq!(calc_next_seed(2 * SEED_PER_RETARGET - 1, &prev, &seed), prev);
    }

    #[test]
    fn test_seed_at_max_height() {
        let prev = Hash([7; 32]);
        let seed = Hash([9; 32]);
        // u64::MAX closes a window: 2^64 is a multiple of SEED_PER_RETARGET
        assert_eq!(calc_next_seed(u64::MAX, &prev, &seed), prev);
        assert_eq!(calc_next_seed(u64::MAX - 1, &prev, &seed), seed);
    }
}
