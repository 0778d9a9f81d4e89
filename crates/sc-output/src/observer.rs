//! `SnapshotOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use sc_network::Network;
use sc_sim::{Arrival, Shipment, SimObserver, Snapshot};

use crate::row::{EmissionRow, NodeSnapshotRow, ShipmentEvent, ShipmentRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots and shipment events to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After a run, check for errors with
/// [`take_error`][Self::take_error].
///
/// Every published snapshot becomes one row per node plus one emissions row;
/// every departure and arrival becomes one shipment row.  `on_run_end`
/// flushes but does not close, so one observer can span several
/// `run_frames` calls.  Call [`finish`](Self::finish) once at the end.
pub struct SnapshotOutputObserver<W: OutputWriter> {
    writer:     W,
    node_keys:  Vec<String>,
    route_keys: Vec<String>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotOutputObserver<W> {
    /// Create an observer backed by `writer`, resolving ids through `network`.
    pub fn new(writer: W, network: &Network) -> Self {
        Self {
            writer,
            node_keys:  network.nodes().iter().map(|n| n.key.clone()).collect(),
            route_keys: network.routes().iter().map(|r| r.key.clone()).collect(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Close the writer.  Idempotent.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn shipment_row(&self, event: ShipmentEvent, at_secs: f64, s: &Shipment, accepted: Option<f64>) -> ShipmentRow {
        ShipmentRow {
            event,
            at_secs,
            route:        self.route_keys[s.route.index()].clone(),
            from:         self.node_keys[s.from.index()].clone(),
            to:           self.node_keys[s.to.index()].clone(),
            size:         s.size,
            accepted,
            emissions_kg: s.emissions_kg,
            bucket:       s.bucket.as_str(),
            scenario:     s.scenario.as_str(),
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SnapshotOutputObserver<W> {
    fn on_departure(&mut self, shipment: &Shipment) {
        let row = self.shipment_row(ShipmentEvent::Departure, shipment.departed_at, shipment, None);
        let result = self.writer.write_shipment(&row);
        self.store_err(result);
    }

    fn on_arrival(&mut self, arrival: &Arrival) {
        let s = &arrival.shipment;
        let row = self.shipment_row(ShipmentEvent::Arrival, s.arrives_at, s, Some(arrival.accepted));
        let result = self.writer.write_shipment(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let rows: Vec<NodeSnapshotRow> = snapshot
            .nodes
            .iter()
            .map(|n| NodeSnapshotRow {
                tick:            snapshot.tick,
                elapsed_secs:    snapshot.elapsed_secs,
                node:            n.key.clone(),
                stock:           n.stock,
                capacity:        n.capacity,
                inbound:         n.inbound,
                outbound:        n.outbound,
                production_rate: n.production_rate,
                sales_rate:      n.sales_rate,
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_nodes(&rows);
            self.store_err(result);
        }

        let row = EmissionRow {
            tick:         snapshot.tick,
            elapsed_secs: snapshot.elapsed_secs,
            date:         snapshot.date.to_string(),
            scenario:     snapshot.scenario.as_str(),
            truck:        snapshot.emissions.truck,
            rail:         snapshot.emissions.rail,
            air:          snapshot.emissions.air,
        };
        let result = self.writer.write_emissions(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _snapshot: &Snapshot) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
