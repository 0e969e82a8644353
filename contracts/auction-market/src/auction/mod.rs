//! Deadline auctions: list, bid, finish, and cancel.

pub mod types;
mod bid;
mod lifecycle;
mod views;

pub use types::*;
