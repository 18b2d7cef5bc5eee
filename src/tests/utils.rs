use crate::db::connection::{init_db, Database};
use crate::domain::{Listing, ListingPool};
use crate::market::{ListingPage, ListingSource};
use crate::torn::TornError;
use std::cell::RefCell;
use tempfile::TempDir;

/// A database file that lives as long as the guard; the directory is removed on drop.
pub struct TestDb {
    pub db: Database,
    _dir: TempDir,
}

/// Database file in a fresh temp dir, without any schema applied
pub fn make_bare_db() -> TestDb {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.sqlite");
    TestDb {
        db: Database::new(path.to_string_lossy().into_owned()),
        _dir: dir,
    }
}

/// Returns a fresh test database using the production schema
pub fn make_db() -> TestDb {
    let test_db = make_bare_db();
    init_db(&test_db.db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    test_db
}

pub fn pool(entries: &[(i64, i64)]) -> ListingPool {
    entries
        .iter()
        .map(|(sim, price)| Listing::new(*sim, *price, 7))
        .collect()
}

/// In-memory listing source. `None` pages fail with a network error.
pub struct FakeSource {
    pages: Vec<Option<ListingPage>>,
    pub calls: RefCell<Vec<(i64, usize, usize, String)>>,
}

impl FakeSource {
    pub fn new(pages: Vec<Option<ListingPage>>) -> Self {
        Self {
            pages,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ListingSource for FakeSource {
    fn get_page(
        &self,
        property_type_id: i64,
        limit: usize,
        offset: usize,
        sort: &str,
    ) -> Result<ListingPage, TornError> {
        let index = self.calls.borrow().len();
        self.calls
            .borrow_mut()
            .push((property_type_id, limit, offset, sort.to_string()));

        match self.pages.get(index) {
            Some(Some(page)) => Ok(page.clone()),
            Some(None) => Err(TornError::Network("connection reset".into())),
            None => Ok(ListingPage::default()),
        }
    }
}

pub fn page(entries: &[(i64, i64)], has_next: bool) -> Option<ListingPage> {
    Some(ListingPage {
        listings: pool(entries),
        has_next,
    })
}
