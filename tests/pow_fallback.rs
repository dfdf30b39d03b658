//! Fallback diagnostics of the SIMD backend
//!
//! Kept in its own test binary: the warning is emitted at most once per
//! process, so any earlier fallback hash in the same binary would consume it.

use ey_core::constants::INITIAL_SEED;
use ey_core::crypto::Hash;
use ey_core::pow::{LegacyBackend, PowBackend, SimdBackend, SIMD_AVAILABLE};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_fallback_warns_once_and_matches_reference() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let (first, second) = tracing::subscriber::with_default(subscriber, || {
        (
            SimdBackend.compute_hash(&Hash::zero(), &INITIAL_SEED),
            SimdBackend.compute_hash(&Hash([0xff; 32]), &INITIAL_SEED),
        )
    });

    // Fallback is not an error: output is the reference hash either way
    assert_eq!(first, LegacyBackend.compute_hash(&Hash::zero(), &INITIAL_SEED));
    assert_eq!(second, LegacyBackend.compute_hash(&Hash([0xff; 32]), &INITIAL_SEED));

    let warnings: Vec<String> = log
        .lines()
        .into_iter()
        .filter(|line| line.contains("WARN"))
        .collect();

    if SIMD_AVAILABLE {
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    } else {
        assert_eq!(warnings.len(), 1, "expected one warning, got {:?}", warnings);
        assert!(warnings[0].contains("reference kernel"));
        assert!(warnings[0].contains("ey_core::pow"));
    }
}
