pub mod cache;
pub mod comps;
pub mod fetcher;
pub mod percentile;
pub mod pricing;

pub use cache::ListingCache;
pub use comps::{find_comps, CompResult};
pub use fetcher::{ListingFetcher, ListingPage, ListingSource};
pub use pricing::{build_price_table, PriceTier};

use crate::domain::ListingPool;
use tracing::{info, warn};

/// How many market pages to read when the cache misses.
#[derive(Debug, Clone, Copy)]
pub struct FetchSettings {
    pub page_size: usize,
    pub max_pages: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            page_size: fetcher::DEFAULT_PAGE_SIZE,
            max_pages: fetcher::DEFAULT_MAX_PAGES,
        }
    }
}

/// Returns the cached pool when fresh, otherwise fetches and caches a new one.
/// `force_refresh` skips the cache read; the stored entry is only replaced
/// by a successful fetch.
///
/// A failed fetch is logged and yields an empty pool, which is not cached, so
/// pricing still runs and reports no data.
pub fn load_pool<S: ListingSource>(
    cache: &ListingCache,
    fetcher: &ListingFetcher<'_, S>,
    settings: FetchSettings,
    force_refresh: bool,
) -> ListingPool {
    if !force_refresh {
        if let Some(pool) = cache.read() {
            info!(listings = pool.len(), "using cached rental listings");
            return pool;
        }
    }

    match fetcher.fetch(settings.page_size, settings.max_pages) {
        Ok(pool) => {
            cache.write(&pool);
            pool
        }
        Err(e) => {
            warn!(
                error = %e,
                fetched_before_failure = e.partial.len(),
                "rental listing fetch failed, pricing without comps"
            );
            ListingPool::new()
        }
    }
}
