//! AuctionHouse - registry and escrow holder for all auctions
//!
//! The house is the factory and directory: it assigns dense creation-order
//! ids, stores each auction's state record, and holds every open auction's
//! escrow in its own contract balance. All fund movement goes through the
//! house; the per-auction rules live in [`crate::auction`].

use alloc::vec::Vec;
use odra::casper_types::U512;
use odra::prelude::*;

use crate::auction::{Auction, CloseAuthority};
use crate::errors::Error;
use crate::events::{AuctionCreated, AuctionEnded, BidPlaced, BidRefunded};

/// Auction registry and escrow contract
#[odra::module]
pub struct AuctionHouse {
    /// Auction records, keyed by creation-order id. Append-only.
    auctions: Mapping<u64, Auction>,
    /// Number of auctions ever created; the next id to assign.
    auction_count: Var<u64>,
}

#[odra::module]
impl AuctionHouse {
    /// Initialize the contract
    pub fn init(&mut self) {
        self.auction_count.set(0);
    }

    // ============ STATE-CHANGING ENTRY POINTS ============

    /// Register a new auction owned by the caller.
    ///
    /// `end_time` is a block time in milliseconds and must be strictly in
    /// the future. Returns the new auction id.
    pub fn create_auction(&mut self, name: String, end_time: u64) -> u64 {
        let now = self.env().get_block_time();
        if end_time <= now {
            self.env().revert(Error::InvalidEndTime);
        }

        let owner = self.env().caller();
        let auction_id = self.auction_count.get_or_default();
        self.auction_count.set(auction_id + 1);
        self.auctions
            .set(&auction_id, Auction::new(owner, name.clone(), end_time));

        self.env().emit_event(AuctionCreated {
            auction_id,
            owner,
            name,
            end_time,
        });

        auction_id
    }

    /// Bid the attached CSPR on an auction.
    ///
    /// On success the previous leader, if any, is refunded their full
    /// escrowed amount and the attached value becomes the new escrow.
    /// Reverts leave both state and funds untouched.
    #[odra(payable)]
    pub fn bid(&mut self, auction_id: u64) {
        let caller = self.env().caller();
        let amount = self.env().attached_value();
        let now = self.env().get_block_time();

        let mut auction = self.load(auction_id);
        let refund = auction
            .place_bid(caller, amount, now)
            .unwrap_or_revert(&self.env());

        // Commit the new leader before any funds leave the contract; a
        // failed refund transfer then reverts the whole deploy, so the
        // escrow ledger can never hold two leaders' funds at once.
        self.auctions.set(&auction_id, auction);

        if let Some(payout) = refund {
            self.env().transfer_tokens(&payout.to, &payout.amount);
            self.env().emit_event(BidRefunded {
                auction_id,
                bidder: payout.to,
                amount: payout.amount,
            });
        }

        self.env().emit_event(BidPlaced {
            auction_id,
            bidder: caller,
            amount,
        });
    }

    /// Settle an expired auction, releasing its escrow to the owner.
    /// Only the auction owner may call this, and only once.
    pub fn end_auction(&mut self, auction_id: u64) {
        let caller = self.env().caller();
        let now = self.env().get_block_time();

        let mut auction = self.load(auction_id);
        let payout = auction
            .settle(CloseAuthority::Owner(caller), now)
            .unwrap_or_revert(&self.env());

        let winner = auction.highest_bidder;
        self.auctions.set(&auction_id, auction);

        if payout.amount > U512::zero() {
            self.env().transfer_tokens(&payout.to, &payout.amount);
        }

        self.env().emit_event(AuctionEnded {
            auction_id,
            winner,
            amount: payout.amount,
        });
    }

    /// Settle every auction whose deadline has passed.
    ///
    /// Auctions are visited in creation order. One auction failing its
    /// settlement guards never stops the sweep; it is skipped with its
    /// state and escrow untouched. Calling this when nothing qualifies is
    /// a no-op, so the periodic external driver can invoke it freely.
    pub fn end_expired_auctions(&mut self) {
        let now = self.env().get_block_time();
        let count = self.auction_count.get_or_default();

        for auction_id in 0..count {
            let mut auction = match self.auctions.get(&auction_id) {
                Some(auction) => auction,
                None => continue,
            };
            let payout = match auction.settle(CloseAuthority::Registry, now) {
                Ok(payout) => payout,
                // Not yet expired or already settled; leave it untouched.
                Err(_) => continue,
            };

            let winner = auction.highest_bidder;
            self.auctions.set(&auction_id, auction);

            if payout.amount > U512::zero() {
                self.env().transfer_tokens(&payout.to, &payout.amount);
            }

            self.env().emit_event(AuctionEnded {
                auction_id,
                winner,
                amount: payout.amount,
            });
        }
    }

    // ============ VIEW FUNCTIONS ============

    /// Live snapshot of a single auction.
    pub fn get_auction(&self, auction_id: u64) -> Auction {
        self.load(auction_id)
    }

    /// Snapshots of every registered auction, in creation order.
    pub fn get_all_auctions(&self) -> Vec<Auction> {
        let count = self.auction_count.get_or_default();
        (0..count)
            .filter_map(|auction_id| self.auctions.get(&auction_id))
            .collect()
    }

    /// Number of auctions ever created.
    pub fn get_auction_count(&self) -> u64 {
        self.auction_count.get_or_default()
    }

    pub fn get_owner(&self, auction_id: u64) -> Address {
        self.load(auction_id).owner
    }

    pub fn get_name(&self, auction_id: u64) -> String {
        self.load(auction_id).name
    }

    pub fn get_end_time(&self, auction_id: u64) -> u64 {
        self.load(auction_id).end_time
    }

    pub fn get_highest_bid(&self, auction_id: u64) -> U512 {
        self.load(auction_id).highest_bid
    }

    pub fn get_highest_bidder(&self, auction_id: u64) -> Option<Address> {
        self.load(auction_id).highest_bidder
    }

    pub fn is_ended(&self, auction_id: u64) -> bool {
        self.load(auction_id).ended
    }

    /// Funds currently escrowed for an auction. Equals the highest bid
    /// while the auction is open and zero once it has been settled.
    pub fn get_escrow_balance(&self, auction_id: u64) -> U512 {
        self.load(auction_id).escrow_balance()
    }

    // ============ INTERNAL FUNCTIONS ============

    fn load(&self, auction_id: u64) -> Auction {
        self.auctions
            .get(&auction_id)
            .unwrap_or_revert_with(&self.env(), Error::AuctionNotFound)
    }
}
