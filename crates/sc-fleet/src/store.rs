//! The `VehicleStore` — one `VehicleState` per route.

use sc_core::RouteId;

use crate::VehicleState;

/// Vehicle state for every route, indexed by `RouteId`.
pub struct VehicleStore {
    pub states: Vec<VehicleState>,
}

impl VehicleStore {
    /// One idle vehicle for each of `route_count` routes.
    pub fn new(route_count: usize) -> Self {
        Self {
            states: (0..route_count).map(|i| VehicleState::idle(RouteId(i as u32))).collect(),
        }
    }

    #[inline]
    pub fn get(&self, route: RouteId) -> &VehicleState {
        &self.states[route.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, route: RouteId) -> &mut VehicleState {
        &mut self.states[route.index()]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of vehicles currently stepping along their path.
    pub fn moving_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_moving()).count()
    }

    /// Park every vehicle at its first waypoint and zero trip counters.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            *state = VehicleState::idle(state.route);
        }
    }
}
