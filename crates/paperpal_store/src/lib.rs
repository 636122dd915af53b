//! Validated SQLite persistence for evaluated papers and sent newsletters.
//! Callers build a record, hand it to a [`Store`], and the store re-checks it
//! before writing one row.

pub mod db;
pub mod logging;
pub mod model;
pub mod store;

pub use db::StorageInitError;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::newsletter::Newsletter;
pub use model::paper::Paper;
pub use model::validation::ValidationError;
pub use store::{RowId, Store, StoreError, StoreResult, DEFAULT_DB_PATH};

/// Returns the store crate version.
pub fn store_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
