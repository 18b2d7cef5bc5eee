use crate::db::cache_entries::{get_entry, put_entry};
use crate::db::connection::Database;
use crate::domain::ListingPool;
use chrono::Utc;
use tracing::{debug, warn};

/// How long a fetched pool stays usable, in seconds.
pub const CACHE_TTL_SECS: i64 = 300;

/// Best-effort store for the last fetched listing pool of one property type.
///
/// Reads never fail: a missing, stale or unreadable entry is a miss.
/// Writes replace the whole entry and only log on failure.
pub struct ListingCache {
    db: Database,
    key: String,
}

impl ListingCache {
    pub fn new(db: Database, property_type_id: i64) -> Self {
        Self {
            db,
            key: format!("market_rentals:{property_type_id}"),
        }
    }

    pub fn read(&self) -> Option<ListingPool> {
        self.read_at(Utc::now().timestamp())
    }

    pub fn read_at(&self, now: i64) -> Option<ListingPool> {
        let entry = match self.db.with_conn(|conn| get_entry(conn, &self.key)) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                debug!(key = %self.key, "listing cache empty");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "listing cache unreadable");
                return None;
            }
        };

        let age = now - entry.fetched_at;
        if age >= CACHE_TTL_SECS {
            debug!(key = %self.key, age, "listing cache stale");
            return None;
        }

        match serde_json::from_str::<ListingPool>(&entry.payload) {
            Ok(pool) => {
                debug!(key = %self.key, age, listings = pool.len(), "listing cache hit");
                Some(pool)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "listing cache corrupt");
                None
            }
        }
    }

    pub fn write(&self, pool: &ListingPool) {
        self.write_at(pool, Utc::now().timestamp())
    }

    pub fn write_at(&self, pool: &ListingPool, now: i64) {
        let payload = match serde_json::to_string(pool) {
            Ok(p) => p,
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not encode listing pool");
                return;
            }
        };

        if let Err(e) = self
            .db
            .with_conn(|conn| put_entry(conn, &self.key, &payload, now))
        {
            warn!(key = %self.key, error = %e, "listing cache write failed");
        }
    }
}
