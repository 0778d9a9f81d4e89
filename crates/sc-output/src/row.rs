//! Plain data row types written by output backends.

/// One node's state in a published snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshotRow {
    pub tick:            u64,
    pub elapsed_secs:    f64,
    pub node:            String,
    pub stock:           f64,
    pub capacity:        f64,
    pub inbound:         f64,
    pub outbound:        f64,
    pub production_rate: f64,
    pub sales_rate:      f64,
}

/// Cumulative kg CO₂ of the active scenario at a published snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    /// Simulated date, `YYYY-MM-DD HH:MM:SS`.
    pub date:         String,
    pub scenario:     &'static str,
    pub truck:        f64,
    pub rail:         f64,
    pub air:          f64,
}

impl EmissionRow {
    pub fn total(&self) -> f64 {
        self.truck + self.rail + self.air
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentEvent {
    Departure,
    Arrival,
}

impl ShipmentEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentEvent::Departure => "departure",
            ShipmentEvent::Arrival   => "arrival",
        }
    }
}

/// A shipment leaving or reaching a node.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRow {
    pub event:        ShipmentEvent,
    /// Simulated second of the event.
    pub at_secs:      f64,
    pub route:        String,
    pub from:         String,
    pub to:           String,
    pub size:         f64,
    /// Units the destination took in; `None` for departures.
    pub accepted:     Option<f64>,
    pub emissions_kg: f64,
    pub bucket:       &'static str,
    pub scenario:     &'static str,
}
