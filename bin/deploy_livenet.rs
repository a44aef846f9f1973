//! Livenet deployment script for the auction house
//!
//! Deploys the AuctionHouse contract to Casper network and prints its
//! address for the frontend/driver configuration.

use odra::host::{Deployer, NoArgs};
use odra::prelude::Addressable;
use auction_house::AuctionHouse;

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    let deployer = env.caller();
    println!("Deployer address: {}", deployer.to_string());

    println!("\n=== Deploying AuctionHouse ===");
    env.set_gas(300_000_000_000u64); // 300 CSPR gas

    let auction_house = AuctionHouse::deploy(&env, NoArgs);
    let auction_house_address = auction_house.address();
    println!(
        "AuctionHouse deployed at: {}",
        auction_house_address.to_string()
    );

    println!("\n=== Deployment Summary ===");
    println!("AuctionHouse: {}", auction_house_address.to_string());
    println!("\nDeployment complete!");
}
