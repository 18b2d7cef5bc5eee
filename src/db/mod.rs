pub mod cache_entries;
pub mod connection;
