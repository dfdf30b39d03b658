//! Consensus module - Subsidy schedule, validation checks, gas and PoW seeds

mod gas;
mod rewards;
mod seed;
mod validation;

pub use gas::*;
pub use rewards::*;
pub use seed::*;
pub use validation::*;
