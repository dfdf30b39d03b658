//! Portable reference kernel
//!
//! Plain scalar loops. This is the definition of the PoW hash; the
//! accelerated kernel must reproduce it byte for byte.

use crate::crypto::Hash;
use crate::pow::cache::{finalize, fold, MatrixCache, MATRIX_DIM};

pub(crate) fn hash(header: &Hash, cache: &MatrixCache) -> Hash {
    let mut state = [0i8; MATRIX_DIM];
    for (value, &byte) in state.iter_mut().zip(header.as_bytes()) {
        *value = byte as i8;
    }

    for matrix in cache.matrices() {
        let mut next = [0i8; MATRIX_DIM];
        for (row, out) in next.iter_mut().enumerate() {
            let mut acc: i32 = 0;
            for col in 0..MATRIX_DIM {
                acc += matrix[row * MATRIX_DIM + col] as i32 * state[col] as i32;
            }
            *out = fold(acc);
        }
        state = next;
    }

    finalize(header, &state)
}
