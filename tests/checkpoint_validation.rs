//! A minimal chain validator driven by the active profile
//!
//! Blocks are (height, hash) pairs; the validator only runs the consensus
//! checks that depend on network parameters.

use ey_core::consensus::{check_reorg_depth, verify_checkpoint, ValidationError};
use ey_core::crypto::{sha3_256, Hash};
use ey_core::network::{checkpoint::Checkpoint, ActiveProfile, NetworkProfile, ProfileRegistry};

struct StubChain {
    profile: ActiveProfile,
    blocks: Vec<Hash>,
}

impl StubChain {
    fn new(profile: ActiveProfile) -> Self {
        Self {
            profile,
            blocks: vec![Hash::zero()],
        }
    }

    fn tip_height(&self) -> u64 {
        self.blocks.len() as u64 - 1
    }

    fn connect(&mut self, hash: Hash) -> Result<(), ValidationError> {
        let height = self.blocks.len() as u64;
        verify_checkpoint(&self.profile, height, &hash)?;
        self.blocks.push(hash);
        Ok(())
    }

    /// Replace everything above `fork_height` with `branch`
    fn reorganize(&mut self, fork_height: u64, branch: &[Hash]) -> Result<(), ValidationError> {
        check_reorg_depth(&self.profile, self.tip_height(), fork_height)?;
        let saved = self.blocks.clone();
        self.blocks.truncate(fork_height as usize + 1);
        for hash in branch {
            if let Err(e) = self.connect(*hash) {
                self.blocks = saved;
                return Err(e);
            }
        }
        Ok(())
    }
}

fn block_hash(height: u64, branch: u8) -> Hash {
    let mut data = height.to_be_bytes().to_vec();
    data.push(branch);
    sha3_256(&data)
}

fn devnet() -> ActiveProfile {
    let mut profile = NetworkProfile::solonet();
    profile.checkpoints = vec![
        Checkpoint::new(3, block_hash(3, 0)),
        Checkpoint::new(6, block_hash(6, 0)),
    ];

    let mut registry = ProfileRegistry::empty();
    registry.register("devnet", profile).unwrap();
    registry.activate("devnet").unwrap()
}

fn build_chain(len: u64) -> StubChain {
    let mut chain = StubChain::new(devnet());
    for height in 1..=len {
        chain.connect(block_hash(height, 0)).unwrap();
    }
    chain
}

#[test]
fn test_accepts_matching_checkpoints() {
    let chain = build_chain(8);
    assert_eq!(chain.tip_height(), 8);
}

#[test]
fn test_rejects_checkpoint_mismatch() {
    let mut chain = build_chain(2);
    let forged = block_hash(3, 1);
    assert_eq!(
        chain.connect(forged),
        Err(ValidationError::CheckpointMismatch {
            height: 3,
            expected: block_hash(3, 0),
            got: forged,
        })
    );
    assert_eq!(chain.tip_height(), 2);
}

#[test]
fn test_rejects_reorg_below_checkpoint() {
    let mut chain = build_chain(8);
    let branch: Vec<Hash> = (5..=9).map(|h| block_hash(h, 1)).collect();
    assert_eq!(
        chain.reorganize(4, &branch),
        Err(ValidationError::ReorgBelowCheckpoint {
            fork_height: 4,
            checkpoint_height: 6,
        })
    );
    assert_eq!(chain.tip_height(), 8);
    assert_eq!(chain.blocks[8], block_hash(8, 0));
}

#[test]
fn test_allows_reorg_above_checkpoint() {
    let mut chain = build_chain(8);
    let branch: Vec<Hash> = (7..=10).map(|h| block_hash(h, 1)).collect();
    chain.reorganize(6, &branch).unwrap();
    assert_eq!(chain.tip_height(), 10);
    assert_eq!(chain.blocks[7], block_hash(7, 1));
}

#[test]
fn test_reorg_branch_must_respect_checkpoints() {
    // Fork below the first checkpoint before the node has reached it
    let mut chain = build_chain(2);
    let branch: Vec<Hash> = (2..=4).map(|h| block_hash(h, 1)).collect();
    assert!(matches!(
        chain.reorganize(1, &branch),
        Err(ValidationError::CheckpointMismatch { height: 3, .. })
    ));
    assert_eq!(chain.tip_height(), 2);
    assert_eq!(chain.blocks[2], block_hash(2, 0));
}

#[test]
fn test_mainnet_checkpoint_enforced() {
    let registry = ProfileRegistry::with_defaults();
    let main = registry.activate("mainnet").unwrap();
    let cp = main.checkpoints[0];
    assert!(verify_checkpoint(&main, cp.height, &cp.hash).is_ok());
    assert!(verify_checkpoint(&main, cp.height, &Hash::zero()).is_err());
    assert!(verify_checkpoint(&main, cp.height + 1, &Hash::zero()).is_ok());
}
