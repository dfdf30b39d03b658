//! Eiyaro (EY) Consensus Core
//!
//! Deterministic, network-wide consensus parameters: the block subsidy
//! schedule, network profiles with their checkpoint tables, and the
//! proof-of-work hash backends.
//!
//! Everything here must be bit-for-bit identical on every node.

pub mod asset;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod network;
pub mod pow;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    use crate::crypto::Hash;

    /// Max gas that one block contains
    pub const MAX_BLOCK_GAS: u64 = 10_000_000;

    /// Gas charged per unit of native asset spent on VM execution
    pub const VM_GAS_RATE: i64 = 200;

    /// Gas charged per byte of transaction size
    pub const STORAGE_GAS_RATE: i64 = 1;

    /// Upper bound on the gas one transaction can buy
    pub const MAX_GAS_AMOUNT: i64 = 200_000;

    /// Free gas granted to every transaction
    pub const DEFAULT_GAS_CREDIT: i64 = 30_000;

    /// Blocks a coinbase output must wait before it can be spent
    pub const COINBASE_PENDING_BLOCK_NUMBER: u64 = 50;

    /// Blocks between subsidy reductions
    pub const SUBSIDY_REDUCTION_INTERVAL: u64 = 175_200;

    /// Recurring per-block subsidy before any reduction (in base units)
    pub const BASE_SUBSIDY: u64 = 100_000_000_000;

    /// Genesis block subsidy (in base units)
    pub const INITIAL_BLOCK_SUBSIDY: u64 = 21_000_000_000_000_000;

    /// Subsidy reduction rate per interval, as an exact fraction (10%)
    pub const SUBSIDY_REDUCTION_RATE_NUMERATOR: u64 = 1;
    pub const SUBSIDY_REDUCTION_RATE_DENOMINATOR: u64 = 10;

    /// Blocks between difficulty retargets
    pub const BLOCKS_PER_RETARGET: u64 = 1000;

    /// Target block time in seconds
    pub const TARGET_SECONDS_PER_BLOCK: u64 = 180;

    /// Blocks between proof-of-work seed rotations
    pub const SEED_PER_RETARGET: u64 = 256;

    /// Maximum number of seconds a block time is allowed to be ahead of the current time
    pub const MAX_TIME_OFFSET_SECONDS: u64 = 10 * 60;

    /// Number of previous blocks used for median time past
    pub const MEDIAN_TIME_BLOCKS: usize = 8;

    /// Witness program data sizes
    pub const PAY_TO_WITNESS_PUBKEY_HASH_DATA_SIZE: usize = 20;
    pub const PAY_TO_WITNESS_SCRIPT_HASH_DATA_SIZE: usize = 32;

    /// Maximum arbitrary data carried by a coinbase input
    pub const COINBASE_ARBITRARY_SIZE_LIMIT: usize = 128;

    /// Alias of the native asset
    pub const EY_ALIAS: &str = "EY";

    /// Number of decimal places of the native asset
    pub const DECIMAL_PLACES: u8 = 8;

    /// Proof-of-work seed used until the first rotation.
    /// SHA3-256 of 32 zero bytes.
    pub const INITIAL_SEED: Hash = Hash::from_words([
        11412844483649490393,
        4614157290180302959,
        1780246333311066183,
        9357197556716379726,
    ]);
}
