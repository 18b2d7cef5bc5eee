// src/tests/fetcher_tests.rs

use super::utils::{page, pool, FakeSource};
use crate::market::fetcher::SORT_ASC;
use crate::market::ListingFetcher;

#[test]
fn stops_when_no_next_page() {
    let source = FakeSource::new(vec![
        page(&[(500, 100), (450, 90)], true),
        page(&[(600, 110)], false),
        page(&[(700, 999)], true),
    ]);
    let fetcher = ListingFetcher::new(&source, 13);

    let result = fetcher.fetch(2, 10).unwrap();

    assert_eq!(result, pool(&[(500, 100), (450, 90), (600, 110)]));
    assert_eq!(source.call_count(), 2);
}

#[test]
fn stops_at_max_pages() {
    let source = FakeSource::new(vec![
        page(&[(500, 100)], true),
        page(&[(501, 101)], true),
        page(&[(502, 102)], true),
    ]);
    let fetcher = ListingFetcher::new(&source, 13);

    let result = fetcher.fetch(1, 2).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(source.call_count(), 2);
}

#[test]
fn offsets_step_by_page_size() {
    let source = FakeSource::new(vec![
        page(&[], true),
        page(&[], true),
        page(&[], false),
    ]);
    let fetcher = ListingFetcher::new(&source, 13);
    fetcher.fetch(100, 5).unwrap();

    let calls = source.calls.borrow();
    let offsets: Vec<usize> = calls.iter().map(|c| c.2).collect();
    assert_eq!(offsets, vec![0, 100, 200]);
    for (type_id, limit, _, sort) in calls.iter() {
        assert_eq!(*type_id, 13);
        assert_eq!(*limit, 100);
        assert_eq!(sort, SORT_ASC);
    }
}

#[test]
fn zero_max_pages_makes_no_requests() {
    let source = FakeSource::new(vec![page(&[(500, 100)], true)]);
    let fetcher = ListingFetcher::new(&source, 13);

    assert!(fetcher.fetch(100, 0).unwrap().is_empty());
    assert_eq!(source.call_count(), 0);
}

#[test]
fn failure_carries_pages_read_so_far() {
    let source = FakeSource::new(vec![
        page(&[(500, 100)], true),
        page(&[(510, 105)], true),
        None,
    ]);
    let fetcher = ListingFetcher::new(&source, 13);

    let err = fetcher.fetch(1, 5).unwrap_err();

    assert_eq!(err.page, 2);
    assert_eq!(err.partial, pool(&[(500, 100), (510, 105)]));
    assert!(err.to_string().contains("connection reset"));
}
