//! Eiyaro (EY) parameter inspector
//!
//! Prints the consensus parameters of the configured network.
//!
//! Usage: ey-params [config.toml]

use ey_core::config::NodeConfig;
use ey_core::constants::{INITIAL_SEED, SUBSIDY_REDUCTION_INTERVAL};
use ey_core::consensus::block_subsidy;
use ey_core::crypto::Hash;
use ey_core::network::ProfileRegistry;
use tracing_subscriber::EnvFilter;

const COIN: u64 = 100_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => NodeConfig::load(path)?,
        None => NodeConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = ProfileRegistry::with_defaults();
    let active = config.active_profile(&registry)?;
    let backend = config.pow_backend();

    println!("Eiyaro (EY) consensus parameters");
    println!();

    println!("Network:");
    println!("  Chain ID:    {}", active.id());
    println!("  Name:        {}", active.name);
    println!("  HRP:         {}", active.bech32_hrp_segwit);
    println!(
        "  Port:        {}",
        active.default_port.as_deref().unwrap_or("-")
    );
    for seed in active.seed_endpoints() {
        println!("  Seed:        {}", seed);
    }
    println!();

    println!("Checkpoints:");
    println!("  Count:       {}", active.checkpoints.len());
    match active.latest_checkpoint() {
        Some(cp) => println!("  Latest:      #{} {}", cp.height, cp.hash),
        None => println!("  Latest:      none"),
    }
    println!();

    println!("Subsidy:");
    for height in [
        0,
        1,
        SUBSIDY_REDUCTION_INTERVAL,
        10 * SUBSIDY_REDUCTION_INTERVAL,
        100 * SUBSIDY_REDUCTION_INTERVAL,
        247 * SUBSIDY_REDUCTION_INTERVAL,
    ] {
        let subsidy = block_subsidy(height);
        println!(
            "  #{:<11} {} ({}.{:08} EY)",
            height,
            subsidy,
            subsidy / COIN,
            subsidy % COIN
        );
    }
    println!();

    println!("Proof of work:");
    println!("  Backend:     {}", backend.capability());
    println!(
        "  Zero header: {}",
        backend.compute_hash(&Hash::zero(), &INITIAL_SEED)
    );

    Ok(())
}
