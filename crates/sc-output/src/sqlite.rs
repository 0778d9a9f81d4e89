//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `node_snapshots`, `emissions` and `shipments`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EmissionRow, NodeSnapshotRow, OutputResult, ShipmentRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS node_snapshots (
                 tick            INTEGER NOT NULL,
                 elapsed_secs    REAL    NOT NULL,
                 node            TEXT    NOT NULL,
                 stock           REAL    NOT NULL,
                 capacity        REAL    NOT NULL,
                 inbound         REAL    NOT NULL,
                 outbound        REAL    NOT NULL,
                 production_rate REAL    NOT NULL,
                 sales_rate      REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS emissions (
                 tick         INTEGER NOT NULL,
                 elapsed_secs REAL    NOT NULL,
                 date         TEXT    NOT NULL,
                 scenario     TEXT    NOT NULL,
                 truck_kg     REAL    NOT NULL,
                 rail_kg      REAL    NOT NULL,
                 air_kg       REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS shipments (
                 event        TEXT NOT NULL,
                 at_secs      REAL NOT NULL,
                 route        TEXT NOT NULL,
                 from_node    TEXT NOT NULL,
                 to_node      TEXT NOT NULL,
                 size         REAL NOT NULL,
                 accepted     REAL,
                 emissions_kg REAL NOT NULL,
                 bucket       TEXT NOT NULL,
                 scenario     TEXT NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_nodes(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO node_snapshots \
                 (tick, elapsed_secs, node, stock, capacity, inbound, outbound, production_rate, sales_rate) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.elapsed_secs,
                    row.node,
                    row.stock,
                    row.capacity,
                    row.inbound,
                    row.outbound,
                    row.production_rate,
                    row.sales_rate,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_emissions(&mut self, row: &EmissionRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO emissions (tick, elapsed_secs, date, scenario, truck_kg, rail_kg, air_kg) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.tick as i64,
                row.elapsed_secs,
                row.date,
                row.scenario,
                row.truck,
                row.rail,
                row.air,
            ],
        )?;
        Ok(())
    }

    fn write_shipment(&mut self, row: &ShipmentRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO shipments \
             (event, at_secs, route, from_node, to_node, size, accepted, emissions_kg, bucket, scenario) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                row.event.as_str(),
                row.at_secs,
                row.route,
                row.from,
                row.to,
                row.size,
                row.accepted,
                row.emissions_kg,
                row.bucket,
                row.scenario,
            ],
        )?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
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
