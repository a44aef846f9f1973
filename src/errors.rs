//! Error definitions for the auction house

use odra::prelude::*;

/// Auction house errors
#[odra::odra_error]
#[derive(Debug)]
pub enum Error {
    /// Caller is not allowed to perform this operation
    AccessDenied = 1,
    /// Bidding window has closed
    AuctionExpired = 2,
    /// Bid does not exceed the current highest bid
    BidTooLow = 3,
    /// Deadline has not been reached yet
    AuctionNotYetEnded = 4,
    /// Auction has already been settled
    AuctionAlreadyEnded = 5,
    /// No auction registered under this id
    AuctionNotFound = 6,
    /// End time must be strictly in the future
    InvalidEndTime = 7,
}
