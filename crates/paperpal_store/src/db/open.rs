//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Create missing parent directories of the database file.
//! - Open file connections for one-shot use.
//! - Run schema bootstrap before the store is handed to callers.
//!
//! # Invariants
//! - `initialize` never leaves a connection open on return.
//!
//! # See also
//! - `crate::store` for per-operation connection scoping.

use super::schema::ensure_schema;
use super::{DbResult, StorageInitError};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Opens a connection to the database file at `path`, creating the file when
/// it does not exist.
pub fn open_connection(path: &Path) -> rusqlite::Result<Connection> {
    Connection::open(path)
}

/// Prepares the database at `path` for use by the store.
///
/// # Side effects
/// - Creates parent directories and the database file when missing.
/// - Creates the `papers` and `newsletters` tables when missing.
/// - Emits `schema_ensure` logging events with duration and status.
///
/// # Errors
/// - `InvalidPath` for an empty path.
/// - `CreateDir` when a parent directory cannot be created.
/// - `Sqlite` when the file cannot be opened or the schema cannot be written.
pub fn initialize(path: &Path) -> DbResult<()> {
    let started_at = Instant::now();
    info!("event=schema_ensure module=db status=start");

    let result = ensure_parent_dir(path).and_then(|()| {
        let mut conn = open_connection(path)?;
        ensure_schema(&mut conn)?;
        Ok(())
    });

    match &result {
        Ok(()) => info!(
            "event=schema_ensure module=db status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=schema_ensure module=db status=error duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            error_code(err),
            err
        ),
    }
    result
}

fn ensure_parent_dir(path: &Path) -> DbResult<()> {
    if path.as_os_str().is_empty() {
        return Err(StorageInitError::InvalidPath(path.to_path_buf()));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| StorageInitError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

fn error_code(err: &StorageInitError) -> &'static str {
    match err {
        StorageInitError::InvalidPath(_) => "db_invalid_path",
        StorageInitError::CreateDir { .. } => "db_create_dir_failed",
        StorageInitError::Sqlite(_) => "db_bootstrap_failed",
    }
}
