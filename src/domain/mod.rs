pub mod listing;
pub mod property;

pub use listing::{Listing, ListingPool};
pub use property::OwnedProperty;
