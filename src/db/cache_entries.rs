use crate::errors::AppError;
use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    pub payload: String,
    pub fetched_at: i64,
}

pub fn get_entry(conn: &Connection, key: &str) -> Result<Option<StoredEntry>, AppError> {
    conn.query_row(
        "SELECT payload, fetched_at FROM cache_entries WHERE key = ?1",
        params![key],
        |row| {
            Ok(StoredEntry {
                payload: row.get(0)?,
                fetched_at: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(AppError::from)
}

/// Replace the entry for `key` wholesale.
pub fn put_entry(
    conn: &Connection,
    key: &str,
    payload: &str,
    fetched_at: i64,
) -> Result<(), AppError> {
    conn.execute(
        r#"
        INSERT INTO cache_entries (key, payload, fetched_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            payload = excluded.payload,
            fetched_at = excluded.fetched_at
        "#,
        params![key, payload, fetched_at],
    )?;
    Ok(())
}
