//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `node_snapshots.csv`
//! - `emissions.csv`
//! - `shipments.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EmissionRow, NodeSnapshotRow, OutputResult, ShipmentRow};

pub const NODE_HEADERS: [&str; 9] = [
    "tick", "elapsed_secs", "node", "stock", "capacity",
    "inbound", "outbound", "production_rate", "sales_rate",
];

pub const EMISSION_HEADERS: [&str; 8] = [
    "tick", "elapsed_secs", "date", "scenario", "truck_kg", "rail_kg", "air_kg", "total_kg",
];

pub const SHIPMENT_HEADERS: [&str; 10] = [
    "event", "at_secs", "route", "from", "to", "size", "accepted", "emissions_kg", "bucket", "scenario",
];

/// Writes run output to three CSV files.
pub struct CsvWriter {
    nodes:     Writer<File>,
    emissions: Writer<File>,
    shipments: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.  `dir` is created if missing.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut nodes = Writer::from_path(dir.join("node_snapshots.csv"))?;
        nodes.write_record(NODE_HEADERS)?;

        let mut emissions = Writer::from_path(dir.join("emissions.csv"))?;
        emissions.write_record(EMISSION_HEADERS)?;

        let mut shipments = Writer::from_path(dir.join("shipments.csv"))?;
        shipments.write_record(SHIPMENT_HEADERS)?;

        Ok(Self {
            nodes,
            emissions,
            shipments,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_nodes(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.nodes.write_record(&[
                row.tick.to_string(),
                row.elapsed_secs.to_string(),
                row.node.clone(),
                row.stock.to_string(),
                row.capacity.to_string(),
                row.inbound.to_string(),
                row.outbound.to_string(),
                row.production_rate.to_string(),
                row.sales_rate.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_emissions(&mut self, row: &EmissionRow) -> OutputResult<()> {
        self.emissions.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.date.clone(),
            row.scenario.to_owned(),
            row.truck.to_string(),
            row.rail.to_string(),
            row.air.to_string(),
            row.total().to_string(),
        ])?;
        Ok(())
    }

    fn write_shipment(&mut self, row: &ShipmentRow) -> OutputResult<()> {
        self.shipments.write_record(&[
            row.event.as_str().to_owned(),
            row.at_secs.to_string(),
            row.route.clone(),
            row.from.clone(),
            row.to.clone(),
            row.size.to_string(),
            row.accepted.map(|a| a.to_string()).unwrap_or_default(),
            row.emissions_kg.to_string(),
            row.bucket.to_owned(),
            row.scenario.to_owned(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.nodes.flush()?;
        self.emissions.flush()?;
        self.shipments.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
