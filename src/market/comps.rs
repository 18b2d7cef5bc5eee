use crate::domain::{Listing, ListingPool};
use crate::market::percentile::percentile;

pub const DEFAULT_BAND: i64 = 100;
pub const DEFAULT_LIMIT: usize = 12;
pub const SAMPLE_SIZE: usize = 6;

/// Price statistics of the comps picked for one target unit.
/// All zeroes with no samples means there was nothing comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompResult {
    pub count: usize,
    pub median: i64,
    pub p25: i64,
    pub p75: i64,
    pub samples: Vec<Listing>,
}

impl CompResult {
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Picks the listings most comparable to `target` and summarises their prices.
///
/// Exact similarity matches come first (cheapest first), then listings within
/// `band` ordered by distance and then price. At most `limit` are picked.
pub fn find_comps(pool: &ListingPool, target: i64, band: i64, limit: usize) -> CompResult {
    let (mut exact, mut near): (Vec<Listing>, Vec<Listing>) = pool
        .iter()
        .copied()
        .filter(|l| l.is_valid() && (l.similarity_value - target).abs() <= band)
        .partition(|l| l.similarity_value == target);

    exact.sort_by_key(|l| l.price_per_period);
    near.sort_by_key(|l| ((l.similarity_value - target).abs(), l.price_per_period));

    let picked: Vec<Listing> = exact.into_iter().chain(near).take(limit).collect();
    if picked.is_empty() {
        return CompResult::default();
    }

    let mut prices: Vec<i64> = picked.iter().map(|l| l.price_per_period).collect();
    prices.sort_unstable();

    CompResult {
        count: picked.len(),
        median: percentile(&prices, 0.50),
        p25: percentile(&prices, 0.25),
        p75: percentile(&prices, 0.75),
        samples: picked.iter().take(SAMPLE_SIZE).copied().collect(),
    }
}
