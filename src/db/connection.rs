use rusqlite::Connection;
use std::cell::RefCell;
use tracing::info;

use crate::errors::AppError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slot, remembered together with the path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    ///
    /// The connection is opened lazily and reused for the rest of the thread,
    /// unless a handle for a different file asks for it.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Connection) -> Result<T, AppError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let reuse = matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if !reuse {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| AppError::DbError(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(AppError::InternalError),
                }
            })
            .map_err(|_| AppError::InternalError)?
    }
}

/// Apply the bundled schema to the database.
pub fn init_db(db: &Database) -> Result<(), AppError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| AppError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    info!(path = db.path(), "database initialized");
    Ok(())
}
