//! `sc-core` — foundational types for the `supply_twin` simulation engine.
//!
//! This crate is a dependency of every other `sc-*` crate.  It has no `sc-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `RouteId`                                   |
//! | [`geo`]         | `GeoPoint`, haversine distance, path length           |
//! | [`time`]        | `SimClock` (play/pause/speed, date mapping)           |
//! | [`seasonality`] | calendar demand multiplier                            |
//! | [`transport`]   | `TransportMode`, `EmissionBucket`                     |
//! | [`deferred`]    | `DeferredQueue<T>`, `TimerHandle`, `Due<T>`           |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public value types.      |

pub mod deferred;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod seasonality;
pub mod time;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use deferred::{DeferredQueue, Due, TimerHandle};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{NodeId, RouteId};
pub use rng::SimRng;
pub use time::SimClock;
pub use transport::{EmissionBucket, TransportMode};
