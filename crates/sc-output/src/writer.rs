//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EmissionRow, NodeSnapshotRow, OutputResult, ShipmentRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never sees these errors directly; they are stored and
/// retrieved with [`SnapshotOutputObserver::take_error`][crate::SnapshotOutputObserver::take_error].
pub trait OutputWriter {
    /// Write every node's row for one snapshot.
    fn write_nodes(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()>;

    /// Write one cumulative-emissions row.
    fn write_emissions(&mut self, row: &EmissionRow) -> OutputResult<()>;

    /// Write one departure or arrival event.
    fn write_shipment(&mut self, row: &ShipmentRow) -> OutputResult<()>;

    /// Push buffered rows to storage.  Writing may continue afterwards.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
