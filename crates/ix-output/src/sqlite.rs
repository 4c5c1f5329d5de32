//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `trips.db` file in the configured output directory with
//! two tables: `trips` and `run_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, TripRow};

/// Writes trip logs to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `trips.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("trips.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trips (
                 vehicle_id   INTEGER NOT NULL,
                 origin       TEXT    NOT NULL,
                 destination  TEXT    NOT NULL,
                 turn         TEXT    NOT NULL,
                 requested_ms INTEGER NOT NULL,
                 admitted_ms  INTEGER NOT NULL,
                 departed_ms  INTEGER NOT NULL,
                 wait_ms      INTEGER NOT NULL,
                 service_ms   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summaries (
                 vehicle_count INTEGER NOT NULL,
                 wall_time_ms  INTEGER NOT NULL,
                 total_wait_ms INTEGER NOT NULL,
                 max_wait_ms   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trips \
                 (vehicle_id, origin, destination, turn, requested_ms, admitted_ms, departed_ms, wait_ms, service_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.vehicle_id,
                    row.origin,
                    row.destination,
                    row.turn,
                    row.requested_ms,
                    row.admitted_ms,
                    row.departed_ms,
                    row.wait_ms,
                    row.service_ms,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summaries (vehicle_count, wall_time_ms, total_wait_ms, max_wait_ms) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                row.vehicle_count,
                row.wall_time_ms,
                row.total_wait_ms,
                row.max_wait_ms,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
