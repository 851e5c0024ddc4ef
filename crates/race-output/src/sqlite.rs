//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `race.db` file in the configured output directory with
//! two tables: `telemetry` and `classification`.

use std::path::Path;

use race_sim::TelemetryFrame;
use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ClassificationRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `race.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("race.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS telemetry (
                 sim_time         REAL    NOT NULL,
                 car_id           INTEGER NOT NULL,
                 lap              INTEGER NOT NULL,
                 position         INTEGER NOT NULL,
                 distance         REAL    NOT NULL,
                 speed            REAL    NOT NULL,
                 tyre_wear        REAL    NOT NULL,
                 tyre_performance REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS classification (
                 car_id          INTEGER PRIMARY KEY,
                 name            TEXT    NOT NULL,
                 finish_position INTEGER,
                 finish_time     REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_frames(&mut self, frames: &[TelemetryFrame]) -> OutputResult<()> {
        if frames.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO telemetry \
                 (sim_time, car_id, lap, position, distance, speed, tyre_wear, tyre_performance) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for frame in frames {
                stmt.execute(rusqlite::params![
                    frame.sim_time,
                    frame.car.0,
                    frame.lap,
                    frame.position,
                    frame.distance,
                    frame.speed,
                    frame.tyre_wear,
                    frame.tyre_performance,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_classification(&mut self, rows: &[ClassificationRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO classification (car_id, name, finish_position, finish_time) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.car_id,
                    row.name,
                    row.position,
                    row.time,
                ])?;
            }
        }
        tx.commit()?;
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
