//! SQLite storage bootstrap.
//!
//! # Responsibility
//! - Create the database file (and its parent directories) on demand.
//! - Guarantee the `papers` and `newsletters` tables exist.
//!
//! # Invariants
//! - Schema creation is idempotent; existing rows are never touched.
//! - Bootstrap connections are closed before returning.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;
pub mod schema;

pub use open::{initialize, open_connection};

pub type DbResult<T> = Result<T, StorageInitError>;

/// The database file or its directory cannot be created or opened.
#[derive(Debug)]
pub enum StorageInitError {
    /// Path is empty and cannot name a database file.
    InvalidPath(PathBuf),
    /// A parent directory could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// SQLite failed to open the file or create the schema.
    Sqlite(rusqlite::Error),
}

impl Display for StorageInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(path) => {
                write!(f, "invalid database path `{}`", path.display())
            }
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create database directory `{}`: {source}",
                path.display()
            ),
            Self::Sqlite(err) => write!(f, "failed to initialize database: {err}"),
        }
    }
}

impl Error for StorageInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPath(_) => None,
            Self::CreateDir { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageInitError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
