//! `sc-output` — run output writers for the supply_twin engine.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                        |
//! |-----------|---------|------------------------------------------------------|
//! | *(none)*  | CSV     | `node_snapshots.csv`, `emissions.csv`, `shipments.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                          |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`SnapshotOutputObserver`], which implements `sc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sc_output::{CsvWriter, SnapshotOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SnapshotOutputObserver::new(writer, sim.network());
//! sim.run_frames(10_000, &mut obs).unwrap();
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotOutputObserver;
pub use row::{EmissionRow, NodeSnapshotRow, ShipmentEvent, ShipmentRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
