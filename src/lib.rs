//! Auction House - Escrow-backed auctions for Casper Network
//!
//! This crate provides a sealed ascending-bid auction house where users can:
//! - Open a named auction with a hard deadline
//! - Bid CSPR, with the previous leader refunded on each outbid
//! - Settle an expired auction, releasing the escrowed winning bid to its owner
//! - Sweep every expired auction closed in a single batch call

#![no_std]

extern crate alloc;

pub mod auction;
pub mod auction_house;
pub mod errors;
pub mod events;

// Re-export main types for external use
pub use auction::{Auction, CloseAuthority, Payout};
pub use auction_house::AuctionHouse;
pub use errors::Error;
pub use events::*;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use auction_house::AuctionHouseHostRef;
