//! Read-only views handed to the presentation layer.

use chrono::NaiveDateTime;

use sc_core::{GeoPoint, NodeId, RouteId};
use sc_fleet::VehiclePhase;
use sc_network::NodeCategory;
use sc_policy::ScenarioId;

use crate::EmissionTotals;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeSnapshot {
    pub node:            NodeId,
    pub key:             String,
    pub stock:           f64,
    pub capacity:        f64,
    pub inbound:         f64,
    pub outbound:        f64,
    pub production_rate: f64,
    pub sales_rate:      f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VehicleSnapshot {
    pub route:    RouteId,
    pub key:      String,
    /// Coordinate of the current waypoint.
    pub position: GeoPoint,
    pub waypoint: usize,
    pub phase:    VehiclePhase,
}

impl VehicleSnapshot {
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.phase == VehiclePhase::Moving
    }
}

/// Everything observable after one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Ticks processed since the last reset.
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub date:         NaiveDateTime,
    pub playing:      bool,
    pub speed:        f64,
    pub scenario:     ScenarioId,
    /// Cumulative totals of the active scenario.
    pub emissions:    EmissionTotals,
    pub nodes:        Vec<NodeSnapshot>,
    pub vehicles:     Vec<VehicleSnapshot>,
    /// Shipments departed but not yet arrived.
    pub in_flight:    usize,
}

impl Snapshot {
    pub fn node(&self, key: &str) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|n| n.key == key)
    }

    pub fn vehicle(&self, key: &str) -> Option<&VehicleSnapshot> {
        self.vehicles.iter().find(|v| v.key == key)
    }
}

/// One facility's static description and live state.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeInspection {
    pub key:           String,
    pub name:          String,
    pub product:       String,
    pub category:      NodeCategory,
    pub pos:           GeoPoint,
    pub initial_stock: f64,
    pub state:         NodeSnapshot,
    /// Keys of routes leaving this node.
    pub outgoing:      Vec<String>,
    /// Keys of routes ending at this node.
    pub incoming:      Vec<String>,
    /// Units currently in flight towards this node.
    pub inbound_in_flight: f64,
}

impl NodeInspection {
    /// Stock as a fraction of capacity, `0.0` for a zero-capacity node.
    pub fn fill_ratio(&self) -> f64 {
        if self.state.capacity > 0.0 {
            self.state.stock / self.state.capacity
        } else {
            0.0
        }
    }
}
