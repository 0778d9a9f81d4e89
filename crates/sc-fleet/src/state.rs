//! Per-route animation state.

use sc_core::{RouteId, TimerHandle};

/// Where a vehicle is in its cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehiclePhase {
    /// Parked at the first waypoint, accepting departure triggers.
    Idle,
    /// Stepping along the path.
    Moving,
    /// At the final waypoint, waiting to be released.
    Holding,
}

impl VehiclePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            VehiclePhase::Idle    => "idle",
            VehiclePhase::Moving  => "moving",
            VehiclePhase::Holding => "holding",
        }
    }
}

/// Animation state for the single vehicle on one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleState {
    pub route: RouteId,

    /// Index into the route's path.
    pub waypoint: usize,

    pub phase: VehiclePhase,

    /// The timer this vehicle is waiting on.  A due timer whose handle does
    /// not match is stale and ignored.
    pub pending: Option<TimerHandle>,

    /// Completed traversals since the last reset.
    pub trips: u64,
}

impl VehicleState {
    /// A parked vehicle at the first waypoint of `route`.
    #[inline]
    pub fn idle(route: RouteId) -> Self {
        Self {
            route,
            waypoint: 0,
            phase:    VehiclePhase::Idle,
            pending:  None,
            trips:    0,
        }
    }

    /// `true` while the vehicle is stepping along its path.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.phase == VehiclePhase::Moving
    }
}
