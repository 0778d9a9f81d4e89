//! `AnimationDriver` — departure triggers and waypoint stepping.

use tracing::trace;

use sc_core::{DeferredQueue, GeoPoint, RouteId, SimRng};
use sc_network::Network;

use crate::{VehiclePhase, VehicleState, VehicleStore};

/// Simulated seconds a vehicle rests at its destination before returning.
///
/// The hold runs on the simulated clock, so its wall-clock length shrinks
/// with the speed multiplier: at 3600x these 3 s pass in under a millisecond.
pub const DEFAULT_HOLD_SECS: f64 = 3.0;

/// What starts an idle vehicle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DepartureTrigger {
    /// A vehicle leaves whenever the dispatcher sends a shipment on its
    /// route.  Movement on screen matches inventory movement.
    #[default]
    Dispatch,
    /// A vehicle leaves at random, with per-call probability
    /// `dt_hours / (frequency_days × 24)`.  Decorative only; ignores the
    /// dispatcher entirely.
    Stochastic,
}

/// Payload of an animation timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VehicleTimer {
    /// Advance to the next waypoint.
    Step(RouteId),
    /// Return from the final waypoint to the first.
    Release(RouteId),
}

/// Drives one vehicle per route.
///
/// The driver never reads a clock; the caller passes the current simulated
/// second to [`advance`](Self::advance) and the trigger methods.
pub struct AnimationDriver {
    /// Per-route vehicle state.
    pub store: VehicleStore,

    timers:    DeferredQueue<VehicleTimer>,
    trigger:   DepartureTrigger,
    hold_secs: f64,
    /// Simulated seconds per path leg, indexed by `RouteId`.
    step_secs: Vec<f64>,
    seed:      u64,
    rng:       SimRng,
}

impl AnimationDriver {
    /// One idle vehicle per route of `network`.
    pub fn new(network: &Network, trigger: DepartureTrigger, hold_secs: f64, seed: u64) -> Self {
        let step_secs = network
            .routes()
            .iter()
            .map(|r| r.path_travel_secs() / r.leg_count().max(1) as f64)
            .collect();
        Self {
            store: VehicleStore::new(network.route_count()),
            timers: DeferredQueue::new(),
            trigger,
            hold_secs: hold_secs.max(0.0),
            step_secs,
            seed,
            rng: SimRng::new(seed),
        }
    }

    #[inline]
    pub fn trigger(&self) -> DepartureTrigger {
        self.trigger
    }

    #[inline]
    pub fn hold_secs(&self) -> f64 {
        self.hold_secs
    }

    /// Simulated seconds the vehicle on `route` spends on each leg.
    #[inline]
    pub fn step_secs(&self, route: RouteId) -> f64 {
        self.step_secs[route.index()]
    }

    #[inline]
    pub fn vehicle(&self, route: RouteId) -> &VehicleState {
        self.store.get(route)
    }

    /// Number of animation timers still queued (stale ones included).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The dispatcher sent a shipment on `route` at `now`.
    ///
    /// Starts the vehicle under [`DepartureTrigger::Dispatch`]; ignored under
    /// the stochastic trigger.  Returns `true` if a vehicle departed.
    pub fn notify_dispatch(&mut self, route: RouteId, now: f64) -> bool {
        match self.trigger {
            DepartureTrigger::Dispatch => self.try_start(route, now),
            DepartureTrigger::Stochastic => false,
        }
    }

    /// Start the vehicle on `route` if it is idle.
    ///
    /// A vehicle that is moving or holding ignores the request.
    pub fn try_start(&mut self, route: RouteId, now: f64) -> bool {
        if self.store.get(route).phase != VehiclePhase::Idle {
            return false;
        }
        let handle = self.timers.push(now + self.step_secs[route.index()], VehicleTimer::Step(route));
        let state = self.store.get_mut(route);
        state.phase = VehiclePhase::Moving;
        state.waypoint = 0;
        state.pending = Some(handle);
        trace!(route = %route, now, "vehicle departed");
        true
    }

    /// Process everything due by `now`.
    ///
    /// `dt_secs` is the simulated time the current tick covered; it only
    /// feeds the stochastic trigger.  Timers that fall due inside the tick
    /// chain from their own `fire_at`, so a long tick advances a vehicle
    /// several waypoints at once.
    ///
    /// Returns the routes whose vehicle reached its final waypoint.
    pub fn advance(&mut self, now: f64, dt_secs: f64, network: &Network) -> Vec<RouteId> {
        if self.trigger == DepartureTrigger::Stochastic && dt_secs > 0.0 {
            let dt_hours = dt_secs / 3_600.0;
            for route in network.routes() {
                if self.store.get(route.id).phase != VehiclePhase::Idle {
                    continue;
                }
                let p = dt_hours / (route.frequency_days * 24.0);
                if self.rng.gen_bool(p) {
                    self.try_start(route.id, now);
                }
            }
        }

        let mut arrived = Vec::new();
        while let Some(due) = self.timers.pop_due(now) {
            let route = match due.payload {
                VehicleTimer::Step(r) | VehicleTimer::Release(r) => r,
            };
            if self.store.get(route).pending != Some(due.handle) {
                continue;
            }
            let last = network.route(route).path.len().saturating_sub(1);

            match due.payload {
                VehicleTimer::Step(_) => {
                    let waypoint = (self.store.get(route).waypoint + 1).min(last);
                    let (phase, next) = if waypoint >= last {
                        arrived.push(route);
                        (VehiclePhase::Holding, VehicleTimer::Release(route))
                    } else {
                        (VehiclePhase::Moving, VehicleTimer::Step(route))
                    };
                    let delay = match next {
                        VehicleTimer::Step(_) => self.step_secs[route.index()],
                        VehicleTimer::Release(_) => self.hold_secs,
                    };
                    let handle = self.timers.push(due.fire_at + delay, next);

                    let state = self.store.get_mut(route);
                    state.waypoint = waypoint;
                    state.phase = phase;
                    state.pending = Some(handle);
                    if phase == VehiclePhase::Holding {
                        state.trips += 1;
                        trace!(route = %route, trips = state.trips, "vehicle arrived");
                    }
                }
                VehicleTimer::Release(_) => {
                    let state = self.store.get_mut(route);
                    state.phase = VehiclePhase::Idle;
                    state.waypoint = 0;
                    state.pending = None;
                }
            }
        }
        arrived
    }

    /// Coordinate of the vehicle on `route`.
    pub fn position(&self, route: RouteId, network: &Network) -> GeoPoint {
        let path = &network.route(route).path;
        let i = self.store.get(route).waypoint.min(path.len().saturating_sub(1));
        path[i]
    }

    /// Park every vehicle, drop every pending timer and rewind the RNG.
    ///
    /// Timers issued before the reset belong to an older queue generation and
    /// can never fire afterwards.
    pub fn reset(&mut self) {
        self.timers.invalidate();
        self.store.reset();
        self.rng = SimRng::new(self.seed);
    }
}
