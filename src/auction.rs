//! Single-auction escrow state machine.
//!
//! `Auction` is a pure state record: transitions validate against the caller
//! identity and the supplied block time, mutate the record, and return the
//! fund movement the contract layer must perform. No transfer happens here,
//! so the machine is deterministically testable without a host environment.
//!
//! Lifecycle: Open (bids accepted) -> Expired-Unclosed (deadline passed,
//! bids blocked, escrow still held) -> Closed (`ended = true`, terminal,
//! escrow released). Time expiry and the `ended` flag are independent:
//! expiry is re-evaluated on every call, the flag only flips on settlement.

use odra::casper_types::U512;
use odra::prelude::*;

use crate::errors::Error;

/// Authority under which an auction may be settled.
///
/// `Owner` carries the identity of a direct `end_auction` caller.
/// `Registry` is the closing capability held by the auction house itself;
/// it is only ever constructed inside the batch expiry sweep.
#[derive(Clone, Copy)]
pub enum CloseAuthority {
    Owner(Address),
    Registry,
}

/// An amount owed out of escrow as the result of a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub to: Address,
    pub amount: U512,
}

/// Per-auction state record stored by the auction house.
#[odra::odra_type]
pub struct Auction {
    pub owner: Address,
    pub name: String,
    /// Deadline as block time in milliseconds. Immutable after construction.
    pub end_time: u64,
    pub highest_bid: U512,
    pub highest_bidder: Option<Address>,
    pub ended: bool,
}

impl Auction {
    /// A fresh auction in the Open state with no bids.
    pub fn new(owner: Address, name: String, end_time: u64) -> Self {
        Self {
            owner,
            name,
            end_time,
            highest_bid: U512::zero(),
            highest_bidder: None,
            ended: false,
        }
    }

    /// Whether the bidding deadline has passed, regardless of `ended`.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.end_time
    }

    /// Funds this auction currently holds on behalf of its leader.
    pub fn escrow_balance(&self) -> U512 {
        if self.ended {
            U512::zero()
        } else {
            self.highest_bid
        }
    }

    /// Validates and records a bid, returning the refund owed to the
    /// previous leader, if there was one. The record is untouched on error.
    ///
    /// Bids must come from a non-owner, land before the deadline and be
    /// strictly greater than the current highest bid.
    pub fn place_bid(
        &mut self,
        bidder: Address,
        amount: U512,
        now: u64,
    ) -> Result<Option<Payout>, Error> {
        if bidder == self.owner {
            return Err(Error::AccessDenied);
        }
        if self.is_expired(now) {
            return Err(Error::AuctionExpired);
        }
        if amount <= self.highest_bid {
            return Err(Error::BidTooLow);
        }

        let refund = self.highest_bidder.map(|to| Payout {
            to,
            amount: self.highest_bid,
        });
        self.highest_bid = amount;
        self.highest_bidder = Some(bidder);

        Ok(refund)
    }

    /// Marks the auction ended and returns the escrow payout owed to the
    /// owner. Exactly one call per auction can succeed; the record is
    /// untouched on error.
    ///
    /// `Owner` authority must match the auction owner. Both authorities
    /// require the deadline to have passed and the auction to be unsettled.
    pub fn settle(&mut self, authority: CloseAuthority, now: u64) -> Result<Payout, Error> {
        if let CloseAuthority::Owner(caller) = authority {
            if caller != self.owner {
                return Err(Error::AccessDenied);
            }
        }
        if !self.is_expired(now) {
            return Err(Error::AuctionNotYetEnded);
        }
        if self.ended {
            return Err(Error::AuctionAlreadyEnded);
        }

        self.ended = true;

        Ok(Payout {
            to: self.owner,
            amount: self.highest_bid,
        })
    }
}
