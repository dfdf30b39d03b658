//! Cryptography module - SHA3-256 hashing

mod hash;

pub use hash::*;
