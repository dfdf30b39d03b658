//! Seed-derived matrix cache shared by both PoW kernels

use crate::crypto::{sha3_256_concat, Hash, HASH_LEN};

/// Matrix side length, equal to the header length
pub const MATRIX_DIM: usize = HASH_LEN;

/// Number of matrices, one per mixing round
pub const MATRIX_COUNT: usize = 4;

const MATRIX_CELLS: usize = MATRIX_DIM * MATRIX_DIM;
const CACHE_CELLS: usize = MATRIX_COUNT * MATRIX_CELLS;

/// `MATRIX_COUNT` square `i8` matrices expanded from a seed
///
/// Cell bytes are SHA3-256(seed || counter) for a little-endian `u32`
/// counter, concatenated. The seed only rotates every `SEED_PER_RETARGET`
/// blocks, so one cache serves many headers.
#[derive(Clone, PartialEq, Eq)]
pub struct MatrixCache {
    seed: Hash,
    cells: Vec<i8>,
}

impl MatrixCache {
    pub fn from_seed(seed: &Hash) -> Self {
        let mut cells = Vec::with_capacity(CACHE_CELLS);
        let mut counter: u32 = 0;
        while cells.len() < CACHE_CELLS {
            let block = sha3_256_concat(&[seed.as_bytes().as_slice(), counter.to_le_bytes().as_slice()]);
            cells.extend(block.as_bytes().iter().map(|&b| b as i8));
            counter += 1;
        }

        Self { seed: *seed, cells }
    }

    pub fn seed(&self) -> &Hash {
        &self.seed
    }

    /// Matrices in round order, each row-major
    pub fn matrices(&self) -> impl Iterator<Item = &[i8]> {
        self.cells.chunks_exact(MATRIX_CELLS)
    }
}

impl std::fmt::Debug for MatrixCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixCache").field("seed", &self.seed).finish()
    }
}

/// Fold a row accumulator back into one signed byte
#[inline]
pub(crate) fn fold(acc: i32) -> i8 {
    (acc ^ (acc >> 8) ^ (acc >> 16)) as i8
}

/// Final digest: SHA3-256(header || mixed state)
pub(crate) fn finalize(header: &Hash, state: &[i8; MATRIX_DIM]) -> Hash {
    let bytes = state.map(|v| v as u8);
    sha3_256_concat(&[header.as_bytes().as_slice(), bytes.as_slice()])
}
