//! Test utilities and helpers for auction house tests

use odra::casper_types::U512;
use odra::host::{Deployer, HostEnv, NoArgs};
use odra::prelude::*;

use auction_house::{AuctionHouse, AuctionHouseHostRef};

/// Constants for testing
pub const CSPR: u64 = 1_000_000_000; // 1 CSPR in motes (9 decimals)
pub const ONE_HOUR_MS: u64 = 60 * 60 * 1000;

/// Deploy a fresh auction house
pub fn setup() -> (HostEnv, AuctionHouseHostRef) {
    let env = odra_test::env();
    let auction_house = AuctionHouse::deploy(&env, NoArgs);
    (env, auction_house)
}

/// Create an auction owned by `owner` that expires `duration_ms` from now
pub fn create_auction(
    env: &HostEnv,
    auction_house: &mut AuctionHouseHostRef,
    owner: Address,
    name: &str,
    duration_ms: u64,
) -> u64 {
    env.set_caller(owner);
    auction_house.create_auction(name.to_string(), env.block_time() + duration_ms)
}

/// Helper to express whole CSPR amounts in motes
pub fn cspr(amount: u64) -> U512 {
    U512::from(amount * CSPR)
}
