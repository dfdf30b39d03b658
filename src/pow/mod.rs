//! Proof-of-work hash backends
//!
//! Two implementations of one hash function:
//! - `LegacyBackend`: portable reference kernel, always built.
//! - `SimdBackend`: vectorized kernel, built with the `simd` feature on
//!   x86_64 and aarch64.
//!
//! Both produce identical output for every input, so nodes with and without
//! acceleration agree on block validity. A build without the vectorized
//! kernel still accepts requests for it: they run the reference kernel and
//! log a warning.

mod cache;
mod legacy;
#[cfg(any(test, all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
mod simd;

pub use cache::{MatrixCache, MATRIX_COUNT, MATRIX_DIM};

use crate::crypto::Hash;
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
use std::sync::Once;
use tracing::debug;
#[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
use tracing::warn;

/// Whether this build contains the vectorized kernel
pub const SIMD_AVAILABLE: bool = cfg!(all(
    feature = "simd",
    any(target_arch = "x86_64", target_arch = "aarch64")
));

/// Which kernel a backend runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowCapability {
    Accelerated,
    Reference,
}

impl PowCapability {
    /// Best capability this build provides
    pub const fn built() -> Self {
        if SIMD_AVAILABLE {
            PowCapability::Accelerated
        } else {
            PowCapability::Reference
        }
    }
}

impl fmt::Display for PowCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowCapability::Accelerated => write!(f, "accelerated"),
            PowCapability::Reference => write!(f, "reference"),
        }
    }
}

/// A proof-of-work hash implementation
pub trait PowBackend: Send + Sync {
    /// Kernel this backend actually runs in this build
    fn capability(&self) -> PowCapability;

    /// Hash a header against a prepared seed cache
    fn hash_with_cache(&self, header: &Hash, cache: &MatrixCache) -> Hash;

    /// Hash a header under `seed`
    fn compute_hash(&self, header: &Hash, seed: &Hash) -> Hash {
        self.hash_with_cache(header, &MatrixCache::from_seed(seed))
    }
}

/// Portable reference backend
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyBackend;

impl PowBackend for LegacyBackend {
    fn capability(&self) -> PowCapability {
        PowCapability::Reference
    }

    fn hash_with_cache(&self, header: &Hash, cache: &MatrixCache) -> Hash {
        legacy::hash(header, cache)
    }
}

/// Vectorized backend, falling back to the reference kernel when not built
#[derive(Debug, Clone, Copy, Default)]
pub struct SimdBackend;

impl PowBackend for SimdBackend {
    fn capability(&self) -> PowCapability {
        PowCapability::built()
    }

    #[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
    fn hash_with_cache(&self, header: &Hash, cache: &MatrixCache) -> Hash {
        simd::hash(header, cache)
    }

    #[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
    fn hash_with_cache(&self, header: &Hash, cache: &MatrixCache) -> Hash {
        warn_simd_fallback();
        legacy::hash(header, cache)
    }
}

#[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
static SIMD_FALLBACK_WARNING: Once = Once::new();

#[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
fn warn_simd_fallback() {
    SIMD_FALLBACK_WARNING.call_once(|| {
        warn!(
            "SIMD proof-of-work kernel is not built for this target, using the reference kernel. \
             Rebuild with `--features simd` on x86_64 or aarch64 to enable it."
        );
    });
}

static LEGACY: LegacyBackend = LegacyBackend;
static SIMD: SimdBackend = SimdBackend;

/// Select a backend at startup
///
/// Asking for `Accelerated` in a build without it returns the SIMD backend in
/// its fallback mode and warns.
pub fn backend(capability: PowCapability) -> &'static dyn PowBackend {
    debug!(requested = %capability, built = %PowCapability::built(), "selecting PoW backend");
    match capability {
        PowCapability::Reference => &LEGACY,
        PowCapability::Accelerated => {
            #[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
            warn_simd_fallback();
            &SIMD
        }
    }
}

/// Hash a header under `seed` with the best backend of this build
pub fn compute_hash(header: &Hash, seed: &Hash) -> Hash {
    backend(PowCapability::built()).compute_hash(header, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_SEED;

    const ZERO_HEADER_INITIAL_SEED: &str =
        "070fa1ab6fcc557ed14d42941f1967693048551eb9042a8d0a057afbd75e81e0";
    const ONES_HEADER_INITIAL_SEED: &str =
        "fb31b1acb329f30841c1d5c627939d29c5d4f57ee6c3b14aeeb6538ca1036b5f";
    const COUNTING_HEADER_ZERO_SEED: &str =
        "6e6432edd6a9200b7ac0292eeec2abdbc01bd340446ab1d9348faf56cec574cc";

    fn counting_header() -> Hash {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        Hash(bytes)
    }

    #[test]
    fn test_legacy_golden_vectors() {
        let legacy = LegacyBackend;
        assert_eq!(
            legacy.compute_hash(&Hash::zero(), &INITIAL_SEED).to_hex(),
            ZERO_HEADER_INITIAL_SEED
        );
        assert_eq!(
            legacy.compute_hash(&Hash([0xff; 32]), &INITIAL_SEED).to_hex(),
            ONES_HEADER_INITIAL_SEED
        );
        assert_eq!(
            legacy.compute_hash(&counting_header(), &Hash::zero()).to_hex(),
            COUNTING_HEADER_ZERO_SEED
        );
    }

    #[test]
    fn test_simd_matches_legacy() {
        let cases = [
            (Hash::zero(), INITIAL_SEED),
            (Hash([0xff; 32]), INITIAL_SEED),
            (counting_header(), Hash::zero()),
            (Hash([0x80; 32]), Hash([0x7f; 32])),
        ];
        for (header, seed) in cases {
            assert_eq!(
                SimdBackend.compute_hash(&header, &seed),
                LegacyBackend.compute_hash(&header, &seed)
            );
        }
    }

    #[test]
    fn test_cache_reuse_matches_fresh_computation() {
        let cache = MatrixCache::from_seed(&INITIAL_SEED);
        for byte in 0..8u8 {
            let header = Hash([byte; 32]);
            assert_eq!(
                LegacyBackend.hash_with_cache(&header, &cache),
                LegacyBackend.compute_hash(&header, &INITIAL_SEED)
            );
        }
    }

    #[test]
    fn test_capabilities() {
        assert_eq!(LegacyBackend.capability(), PowCapability::Reference);
        assert_eq!(SimdBackend.capability(), PowCapability::built());
        assert_eq!(backend(PowCapability::Reference).capability(), PowCapability::Reference);
        assert_eq!(
            backend(PowCapability::Accelerated).capability() == PowCapability::Accelerated,
            SIMD_AVAILABLE
        );
    }

    #[test]
    fn test_default_compute_hash() {
        assert_eq!(
            compute_hash(&Hash::zero(), &INITIAL_SEED).to_hex(),
            ZERO_HEADER_INITIAL_SEED
        );
    }

    #[test]
    fn test_seed_changes_output() {
        let header = counting_header();
        assert_ne!(
            compute_hash(&header, &Hash::zero()),
            compute_hash(&header, &INITIAL_SEED)
        );
    }
}
