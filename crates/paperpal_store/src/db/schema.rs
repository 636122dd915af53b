//! Table definitions for persisted records.
//!
//! There is no migration system: tables are created when absent and left
//! alone otherwise.

use rusqlite::Connection;

/// Tables every initialized database must contain.
pub const REQUIRED_TABLES: &[&str] = &["papers", "newsletters"];

const CREATE_PAPERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS papers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    abstract TEXT NOT NULL,
    date TEXT NOT NULL,
    date_run TEXT NOT NULL,
    score REAL NOT NULL,
    rationale TEXT NOT NULL,
    related BOOLEAN NOT NULL,
    cosine_similarity REAL NOT NULL,
    url TEXT NOT NULL,
    embedding_model TEXT NOT NULL
);";

const CREATE_NEWSLETTERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS newsletters (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    date_sent TEXT NOT NULL
);";

/// Creates both record tables when they do not exist yet.
///
/// Runs in one transaction so a failure leaves neither table half-created.
pub fn ensure_schema(conn: &mut Connection) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_PAPERS_TABLE)?;
    tx.execute_batch(CREATE_NEWSLETTERS_TABLE)?;
    tx.commit()
}

/// Returns whether `table` exists in the connected database.
pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )
}

#[cfg(test)]
mod tests {
    use super::{ensure_schema, table_exists, REQUIRED_TABLES};
    use rusqlite::Connection;

    #[test]
    fn ensure_schema_creates_required_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();

        for table in REQUIRED_TABLES {
            assert!(table_exists(&conn, table).unwrap(), "missing table {table}");
        }
    }

    #[test]
    fn ensure_schema_is_idempotent_and_keeps_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO newsletters (content, start_date, end_date, date_sent)
             VALUES ('body', '2024-01-01', '2024-01-07', '2024-01-08');",
            [],
        )
        .unwrap();

        ensure_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM newsletters;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn not_null_columns_reject_missing_values() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();

        let result = conn.execute(
            "INSERT INTO newsletters (content, start_date, end_date) VALUES ('x', '2024-01-01', '2024-01-02');",
            [],
        );
        assert!(result.is_err());
    }
}
