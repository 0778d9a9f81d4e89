//! Directed transport links.

use sc_core::{GeoPoint, NodeId, RouteId, TransportMode};

/// Builder input for one route.  Endpoints are node keys; they are resolved
/// to [`NodeId`]s when the network is built.
#[derive(Clone, Debug)]
pub struct RouteSpec {
    pub key:              String,
    pub from:             String,
    pub to:               String,
    pub mode:             TransportMode,
    /// Resolved geometry, source first.  `None` (or fewer than two points)
    /// means the geometry could not be obtained; the builder substitutes a
    /// straight two-point path.
    pub path:             Option<Vec<GeoPoint>>,
    /// Units one vehicle carries.
    pub vehicle_capacity: f64,
    /// Travel speed in km/h.
    pub speed_kmh:        f64,
    /// kg CO₂ per unit per km.
    pub emission_factor:  f64,
    /// Nominal interval between shipments, in days.
    pub frequency_days:   f64,
}

impl RouteSpec {
    pub fn new(
        key:  impl Into<String>,
        from: impl Into<String>,
        to:   impl Into<String>,
        mode: TransportMode,
    ) -> Self {
        Self {
            key: key.into(),
            from: from.into(),
            to: to.into(),
            mode,
            path: None,
            vehicle_capacity: 0.0,
            speed_kmh: 0.0,
            emission_factor: 0.0,
            frequency_days: 0.0,
        }
    }

    pub fn path(mut self, path: Vec<GeoPoint>) -> Self {
        self.path = Some(path);
        self
    }

    /// Vehicle payload (units) and speed (km/h).
    pub fn vehicle(mut self, capacity: f64, speed_kmh: f64) -> Self {
        self.vehicle_capacity = capacity;
        self.speed_kmh = speed_kmh;
        self
    }

    pub fn emission_factor(mut self, kg_per_unit_km: f64) -> Self {
        self.emission_factor = kg_per_unit_km;
        self
    }

    pub fn frequency_days(mut self, days: f64) -> Self {
        self.frequency_days = days;
        self
    }
}

/// A validated route.  Static for the lifetime of a run.
#[derive(Clone, Debug)]
pub struct Route {
    pub id:               RouteId,
    pub key:              String,
    pub from:             NodeId,
    pub to:               NodeId,
    pub mode:             TransportMode,
    /// At least two points.
    pub path:             Vec<GeoPoint>,
    pub vehicle_capacity: f64,
    pub speed_kmh:        f64,
    pub emission_factor:  f64,
    pub frequency_days:   f64,
    /// Great-circle distance between the endpoint facilities.  Shipments
    /// are costed and timed on this figure.
    pub distance_km:      f64,
    /// Length along `path`.  Vehicle animation is timed on this figure.
    pub path_length_km:   f64,
    /// `true` if `path` is the straight two-point substitute.
    pub path_fallback:    bool,
}

impl Route {
    /// Simulated seconds a shipment spends in transit.
    #[inline]
    pub fn travel_secs(&self) -> f64 {
        self.distance_km / self.speed_kmh * 3_600.0
    }

    /// Simulated seconds a vehicle takes to traverse `path`.
    #[inline]
    pub fn path_travel_secs(&self) -> f64 {
        self.path_length_km / self.speed_kmh * 3_600.0
    }

    /// Number of legs in `path`.
    #[inline]
    pub fn leg_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
