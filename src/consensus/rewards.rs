//! Block subsidy calculation
//!
//! The genesis block carries the whole initial issuance. Every later block
//! earns `BASE_SUBSIDY`, reduced by 10% once per `SUBSIDY_REDUCTION_INTERVAL`
//! blocks.
//!
//! The reduction is computed in exact rational arithmetic and rounded half
//! away from zero, so the result never depends on the platform's floating
//! point behaviour.

use crate::constants::{
    BASE_SUBSIDY, INITIAL_BLOCK_SUBSIDY, SUBSIDY_REDUCTION_INTERVAL,
    SUBSIDY_REDUCTION_RATE_DENOMINATOR, SUBSIDY_REDUCTION_RATE_NUMERATOR,
};

uint::construct_uint! {
    /// Wide enough for `2 * BASE_SUBSIDY * 9^n` and `2 * 10^n` for every `n`
    /// below `EXHAUSTED_AFTER_INTERVALS`.
    struct U1024(16);
}

/// First interval at which the rounded subsidy reaches zero.
/// Every later interval is zero as well.
pub const EXHAUSTED_AFTER_INTERVALS: u64 = 247;

/// Calculate the coinbase subsidy for a given block height
///
/// This is a pure, deterministic function.
pub fn block_subsidy(height: u64) -> u64 {
    if height == 0 {
        return INITIAL_BLOCK_SUBSIDY;
    }

    subsidy_for_interval(height / SUBSIDY_REDUCTION_INTERVAL)
}

/// Subsidy of a non-genesis block after `intervals` full reductions
///
/// Formula: round(BASE_SUBSIDY * (1 - rate)^intervals), half away from zero.
pub fn subsidy_for_interval(intervals: u64) -> u64 {
    if intervals == 0 {
        return BASE_SUBSIDY;
    }
    if intervals >= EXHAUSTED_AFTER_INTERVALS {
        return 0;
    }

    let retained = U1024::from(SUBSIDY_REDUCTION_RATE_DENOMINATOR - SUBSIDY_REDUCTION_RATE_NUMERATOR);
    let denominator = U1024::from(SUBSIDY_REDUCTION_RATE_DENOMINATOR);

    let mut num = U1024::from(BASE_SUBSIDY);
    let mut den = U1024::one();
    for _ in 0..intervals {
        num = num * retained;
        den = den * denominator;
    }

    // floor(num / den + 1/2) == floor((2 * num + den) / (2 * den))
    let two = U1024::from(2u64);
    let rounded = (num * two + den) / (den * two);
    rounded.low_u64()
}

/// Total issuance of blocks `0..=height`, genesis included
pub fn cumulative_subsidy(height: u64) -> u128 {
    let mut total = INITIAL_BLOCK_SUBSIDY as u128;
    if height == 0 {
        return total;
    }

    let last_interval = height / SUBSIDY_REDUCTION_INTERVAL;
    for interval in 0..=last_interval.min(EXHAUSTED_AFTER_INTERVALS) {
        let first = (interval * SUBSIDY_REDUCTION_INTERVAL).max(1);
        let last = ((interval + 1) * SUBSIDY_REDUCTION_INTERVAL - 1).min(height);
        if first > last {
            continue;
        }
        let blocks = (last - first + 1) as u128;
        total += blocks * subsidy_for_interval(interval) as u128;
    }

    total
}
