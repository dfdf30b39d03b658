//! Vectorized kernel
//!
//! Rows are reduced in fixed-width lanes of `i32`, which the compiler lowers
//! to SSE/AVX on x86_64 and NEON on aarch64. Integer addition is exact here
//! (|acc| <= 32 * 128 * 128), so lane order cannot change the result.

use crate::crypto::Hash;
use crate::pow::cache::{finalize, fold, MatrixCache, MATRIX_DIM};

const LANES: usize = 8;

pub(crate) fn hash(header: &Hash, cache: &MatrixCache) -> Hash {
    let mut state = [0i32; MATRIX_DIM];
    for (value, &byte) in state.iter_mut().zip(header.as_bytes()) {
        *value = byte as i8 as i32;
    }

    for matrix in cache.matrices() {
        let mut next = [0i32; MATRIX_DIM];
        for (out, row) in next.iter_mut().zip(matrix.chunks_exact(MATRIX_DIM)) {
            *out = fold(dot(row, &state)) as i32;
        }
        state = next;
    }

    finalize(header, &state.map(|v| v as i8))
}

#[inline(always)]
fn dot(row: &[i8], state: &[i32; MATRIX_DIM]) -> i32 {
    let mut lanes = [0i32; LANES];
    for (cells, values) in row.chunks_exact(LANES).zip(state.chunks_exact(LANES)) {
        for lane in 0..LANES {
            lanes[lane] += cells[lane] as i32 * values[lane];
        }
    }
    lanes.iter().sum()
}
