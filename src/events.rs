//! Events for the auction house (CEP-88 compliant)

use odra::casper_types::U512;
use odra::prelude::*;

/// Emitted when a new auction is registered
#[odra::event]
pub struct AuctionCreated {
    pub auction_id: u64,
    pub owner: Address,
    pub name: String,
    pub end_time: u64,
}

/// Emitted when a bid takes the lead
#[odra::event]
pub struct BidPlaced {
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: U512,
}

/// Emitted when an outbid leader gets their escrowed funds back
#[odra::event]
pub struct BidRefunded {
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: U512,
}

/// Emitted when an auction is settled and escrow released to its owner
#[odra::event]
pub struct AuctionEnded {
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub amount: U512,
}
