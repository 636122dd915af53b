//! Validated persistence for papers and newsletters.
//!
//! # Responsibility
//! - Own the database path and its schema.
//! - Re-validate records at the persistence boundary before writing.
//! - Scope every write to its own connection and transaction.
//!
//! # Invariants
//! - No connection outlives a single call.
//! - A validation failure writes nothing.
//! - A storage failure rolls back the in-flight transaction; no partial row is
//!   ever visible.
//! - Inserts are independent; nothing spans more than one insert.

use crate::db::{self, open_connection, StorageInitError};
use crate::model::newsletter::Newsletter;
use crate::model::paper::Paper;
use crate::model::validation::ValidationError;
use log::{error, info, warn};
use rusqlite::{params, Transaction};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub mod guard;

/// Database file used when callers do not pick one.
pub const DEFAULT_DB_PATH: &str = "papers.db";

/// Surrogate identifier SQLite assigns to an inserted row.
pub type RowId = i64;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of an insert operation.
#[derive(Debug)]
pub enum StoreError {
    /// The record was rejected before any write was attempted.
    Validation(ValidationError),
    /// The write failed after validation passed; the transaction was rolled back.
    Storage(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "storage error: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(value)
    }
}

/// Handle to one single-file record database.
///
/// Holds only the path; each operation opens and releases its own
/// connection. Pass the handle explicitly to whatever needs to write.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens (or creates) the database at `path` and ensures its schema.
    ///
    /// Safe to call repeatedly on the same path; existing rows are kept.
    ///
    /// # Errors
    /// - `StorageInitError` when the directory or file cannot be created or
    ///   opened, or the schema cannot be written.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageInitError> {
        let path = path.as_ref().to_path_buf();
        let started_at = Instant::now();
        info!("event=store_open module=store status=start");

        match db::initialize(&path) {
            Ok(()) => {
                info!(
                    "event=store_open module=store status=ok path={} duration_ms={}",
                    path.display(),
                    started_at.elapsed().as_millis()
                );
                Ok(Self { path })
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error path={} duration_ms={} error={}",
                    path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens the store at [`DEFAULT_DB_PATH`] relative to the working directory.
    pub fn open_default() -> Result<Self, StorageInitError> {
        Self::open(DEFAULT_DB_PATH)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts one paper and returns its assigned row id.
    ///
    /// # Errors
    /// - `StoreError::Validation` naming the offending field; nothing is
    ///   written.
    /// - `StoreError::Storage` when SQLite fails; the transaction is rolled
    ///   back.
    pub fn insert_paper(&self, paper: &Paper) -> StoreResult<RowId> {
        let started_at = Instant::now();
        reject_invalid("paper_insert", guard::check_paper(paper))?;

        let result = self.with_transaction(|tx| {
            tx.execute(
                "INSERT INTO papers (
                    title,
                    abstract,
                    date,
                    date_run,
                    score,
                    rationale,
                    related,
                    cosine_similarity,
                    url,
                    embedding_model
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
                params![
                    paper.title.as_str(),
                    paper.abstract_text.as_str(),
                    paper.date.as_str(),
                    paper.date_run.as_str(),
                    paper.score,
                    paper.rationale.as_str(),
                    paper.related,
                    paper.cosine_similarity,
                    paper.url.as_str(),
                    paper.embedding_model.as_str(),
                ],
            )?;
            Ok(tx.last_insert_rowid())
        });

        log_write("paper_insert", started_at, &result);
        result
    }

    /// Inserts one newsletter and returns its assigned row id.
    ///
    /// # Errors
    /// - `StoreError::Validation` for an unparseable date or when
    ///   `start_date` is after `end_date`; nothing is written.
    /// - `StoreError::Storage` when SQLite fails; the transaction is rolled
    ///   back.
    pub fn insert_newsletter(&self, newsletter: &Newsletter) -> StoreResult<RowId> {
        let started_at = Instant::now();
        reject_invalid("newsletter_insert", guard::check_newsletter(newsletter))?;

        let result = self.with_transaction(|tx| {
            tx.execute(
                "INSERT INTO newsletters (content, start_date, end_date, date_sent)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    newsletter.content.as_str(),
                    newsletter.start_date.as_str(),
                    newsletter.end_date.as_str(),
                    newsletter.date_sent.as_str(),
                ],
            )?;
            Ok(tx.last_insert_rowid())
        });

        log_write("newsletter_insert", started_at, &result);
        result
    }

    /// Ends this handle's lifecycle.
    ///
    /// No connection is held between calls, so there is nothing to flush.
    pub fn close(self) {
        info!(
            "event=store_close module=store status=ok path={}",
            self.path.display()
        );
    }

    /// Runs `work` inside a transaction on a fresh connection.
    ///
    /// Commits when `work` returns `Ok`. On `Err`, or when unwinding, the
    /// transaction guard rolls back on drop. The connection closes when this
    /// returns on every path.
    fn with_transaction<T>(
        &self,
        work: impl FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    ) -> StoreResult<T> {
        let mut conn = open_connection(&self.path)?;
        let tx = conn.transaction()?;
        let value = work(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

fn reject_invalid(event: &str, check: Result<(), ValidationError>) -> StoreResult<()> {
    check.map_err(|err| {
        warn!(
            "event={event} module=store status=rejected field={} error={}",
            err.field().unwrap_or("-"),
            err
        );
        StoreError::Validation(err)
    })
}

fn log_write(event: &str, started_at: Instant, result: &StoreResult<RowId>) {
    match result {
        Ok(row_id) => info!(
            "event={event} module=store status=ok row_id={row_id} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=store status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
}
