use serde::{Deserialize, Serialize};

/// One comparable rental offer from the market feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Happiness score of the rented property; the similarity metric for comps.
    pub similarity_value: i64,
    /// Asking rent per day.
    pub price_per_period: i64,
    /// Rental period in days.
    pub period_length: i64,
}

impl Listing {
    pub fn new(similarity_value: i64, price_per_period: i64, period_length: i64) -> Self {
        Self {
            similarity_value,
            price_per_period,
            period_length,
        }
    }

    /// A listing can only be used as a comp when it has a score and a price.
    pub fn is_valid(&self) -> bool {
        self.similarity_value > 0 && self.price_per_period > 0
    }
}

/// Listings in the order they were fetched. Replaced wholesale, never edited.
pub type ListingPool = Vec<Listing>;
