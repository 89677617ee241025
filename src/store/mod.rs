pub mod listeners;
pub mod listings;
pub mod seed;

use thiserror::Error;

pub use listings::ListingStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid listing: {0}")]
    InvalidInput(String),
}
