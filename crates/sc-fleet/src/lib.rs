//! `sc-fleet` — one animated vehicle per route.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`state`]  | `VehiclePhase`, `VehicleState`: per-route animation state    |
//! | [`store`]  | `VehicleStore`: `Vec<VehicleState>` indexed by `RouteId`    |
//! | [`driver`] | `AnimationDriver`, `DepartureTrigger`, `VehicleTimer`        |
//!
//! # Movement model (waypoint stepping)
//!
//! A vehicle walks its route's path one waypoint at a time:
//!
//! 1. A departure trigger puts an `Idle` vehicle into `Moving` at waypoint 0
//!    and schedules a `Step` timer `step_secs` later, where
//!    `step_secs = path_travel_secs / (waypoints − 1)`.
//! 2. Each `Step` advances the waypoint index and schedules the next step.
//! 3. At the final waypoint the vehicle enters `Holding` and a `Release`
//!    timer fires `hold_secs` later.
//! 4. `Release` returns the vehicle to waypoint 0, `Idle`.
//!
//! Timers live in a [`DeferredQueue`](sc_core::DeferredQueue) keyed on
//! simulated seconds.  A stopped clock never reaches them, so pausing keeps
//! the waypoint index, and a higher speed multiplier shortens the wall-clock
//! duration of every step without any rescaling here.

pub mod driver;
pub mod state;
pub mod store;


pub use driver::{AnimationDriver, DepartureTrigger, VehicleTimer, DEFAULT_HOLD_SECS};
pub use state::{VehiclePhase, VehicleState};
pub use store::VehicleStore;
