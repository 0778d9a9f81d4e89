//! Shipment dispatcher.
//!
//! Threshold policy, evaluated once per route per tick in route-id order:
//!
//! ```text
//! if stock(source) > DISPATCH_THRESHOLD × vehicle_capacity:
//!     size       = outbound(source, min(vehicle_capacity, stock(source)))
//!     emissions  = size × distance_km × effective_emission_factor
//!     stock(source) −= size
//!     arrival at now + distance_km / speed_kmh hours
//! ```
//!
//! The debit happens before the next route is evaluated, so two routes out
//! of the same node never ship the same units.

use tracing::{debug, trace};

use sc_core::{DeferredQueue, EmissionBucket, NodeId, RouteId};
use sc_network::Network;
use sc_policy::{OverrideTable, ScenarioId};

use crate::{EmissionLedger, Inventory};

/// Fraction of vehicle capacity the source stock must strictly exceed.
pub const DISPATCH_THRESHOLD: f64 = 0.8;

/// `true` if `stock` is enough to send a vehicle of `capacity`.
#[inline]
pub fn should_dispatch(stock: f64, capacity: f64) -> bool {
    stock > capacity * DISPATCH_THRESHOLD
}

/// One consignment in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Shipment {
    pub route:        RouteId,
    pub from:         NodeId,
    pub to:           NodeId,
    pub size:         f64,
    pub distance_km:  f64,
    /// kg CO₂ booked at departure.
    pub emissions_kg: f64,
    pub bucket:       EmissionBucket,
    /// Scenario the emissions were booked under.
    pub scenario:     ScenarioId,
    /// Simulated seconds.
    pub departed_at:  f64,
    /// Simulated seconds.
    pub arrives_at:   f64,
}

/// A shipment that reached its destination, with the units that fit.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrival {
    pub shipment: Shipment,
    pub accepted: f64,
}

/// Departure decisions plus the queue of shipments in flight.
#[derive(Default)]
pub struct Dispatcher {
    in_flight: DeferredQueue<Shipment>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shipments currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// In-flight shipments, in no particular order.
    pub fn iter_in_flight(&self) -> impl Iterator<Item = &Shipment> + '_ {
        self.in_flight.iter()
    }

    /// Evaluate every route once at simulated second `now`.
    ///
    /// Debits sources, books emissions under `scenario`, queues arrivals and
    /// returns the departures in route order.
    pub fn dispatch(
        &mut self,
        now:       f64,
        network:   &Network,
        inventory: &mut Inventory,
        overrides: &OverrideTable,
        scenario:  ScenarioId,
        ledger:    &mut EmissionLedger,
    ) -> Vec<Shipment> {
        let mut departed = Vec::new();
        for route in network.routes() {
            if overrides.blocks_outbound(route.from) {
                continue;
            }
            let stock = inventory.stock(route.from);
            if !should_dispatch(stock, route.vehicle_capacity) {
                continue;
            }
            // Overrides may shrink a load, never grow it past vehicle or stock.
            let limit = route.vehicle_capacity.min(stock);
            let size = overrides.outbound(route.from, limit).min(limit);
            if size <= 0.0 {
                continue;
            }

            let factor = overrides.effective_emission_factor(route);
            let bucket = overrides.effective_mode(route).emission_bucket();
            let emissions_kg = size * route.distance_km * factor;
            ledger.add(scenario, bucket, emissions_kg);
            inventory.debit(route.from, size);

            let shipment = Shipment {
                route: route.id,
                from: route.from,
                to: route.to,
                size,
                distance_km: route.distance_km,
                emissions_kg,
                bucket,
                scenario,
                departed_at: now,
                arrives_at: now + route.travel_secs(),
            };
            debug!(
                route = %route.key,
                size,
                emissions_kg,
                bucket = %bucket,
                arrives_at = shipment.arrives_at,
                "shipment departed"
            );
            self.in_flight.push(shipment.arrives_at, shipment.clone());
            departed.push(shipment);
        }
        departed
    }

    /// Credit every shipment due by `now` to its destination, earliest first.
    pub fn deliver_due(&mut self, now: f64, inventory: &mut Inventory) -> Vec<Arrival> {
        let mut arrived = Vec::new();
        while let Some(due) = self.in_flight.pop_due(now) {
            let shipment = due.payload;
            let accepted = inventory.credit(shipment.to, shipment.size);
            trace!(
                route = %shipment.route,
                size = shipment.size,
                accepted,
                "shipment arrived"
            );
            arrived.push(Arrival { shipment, accepted });
        }
        arrived
    }

    /// Drop every shipment in flight.  Their arrivals never happen.
    pub fn reset(&mut self) {
        self.in_flight.invalidate();
    }
}
