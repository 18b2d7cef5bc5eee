use crate::domain::{Listing, ListingPool};
use crate::torn::TornError;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_MAX_PAGES: usize = 5;

/// Cheapest listings first.
pub const SORT_ASC: &str = "ASC";

/// One page of market listings, already decoded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingPage {
    pub listings: Vec<Listing>,
    pub has_next: bool,
}

/// Where rental listings come from.
pub trait ListingSource {
    fn get_page(
        &self,
        property_type_id: i64,
        limit: usize,
        offset: usize,
        sort: &str,
    ) -> Result<ListingPage, TornError>;
}

/// A page request failed part way through pagination.
#[derive(Debug, Error)]
#[error("listing fetch failed on page {page}: {source}")]
pub struct FetchFailure {
    pub page: usize,
    /// Whatever the earlier pages returned.
    pub partial: ListingPool,
    #[source]
    pub source: TornError,
}

pub struct ListingFetcher<'a, S: ListingSource> {
    source: &'a S,
    property_type_id: i64,
}

impl<'a, S: ListingSource> ListingFetcher<'a, S> {
    pub fn new(source: &'a S, property_type_id: i64) -> Self {
        Self {
            source,
            property_type_id,
        }
    }

    /// Walks the market pages, cheapest first, until there is no next page
    /// or `max_pages` pages have been read.
    pub fn fetch(&self, max_page_size: usize, max_pages: usize) -> Result<ListingPool, FetchFailure> {
        let mut pool = ListingPool::new();

        for page in 0..max_pages {
            let offset = max_page_size * page;
            debug!(page, offset, "fetching rental listings");

            let result = self.source.get_page(
                self.property_type_id,
                max_page_size,
                offset,
                SORT_ASC,
            );

            let listing_page = match result {
                Ok(p) => p,
                Err(source) => {
                    return Err(FetchFailure {
                        page,
                        partial: pool,
                        source,
                    })
                }
            };

            let has_next = listing_page.has_next;
            pool.extend(listing_page.listings);

            if !has_next {
                break;
            }
        }

        info!(
            property_type = self.property_type_id,
            listings = pool.len(),
            "rental listings fetched"
        );
        Ok(pool)
    }
}
