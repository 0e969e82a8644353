//! Items: creation, fixed-price listing, purchase, ownership index and views.

pub mod types;
mod index;
mod listing;
mod purchase;
mod views;

pub use types::*;
