//! `sc-sim` — tick pipeline orchestrator for the supply_twin engine.
//!
//! # Frame loop
//!
//! ```text
//! each frame:
//!   dt = clock.advance(frame_secs)          (0 while stopped → nothing runs)
//!   ① Counters  zero per-tick inbound/outbound
//!   ② Rates     production / sales × seasonality × scenario overrides
//!   ③ Arrivals  credit shipments whose arrival time has elapsed
//!   ④ Dispatch  threshold trigger per route; emissions to active scenario
//!   ⑤ Fleet     start / step / release animated vehicles
//!   ⑥ History   one comparison point per simulated day
//!   ⑦ Snapshot  every `snapshot_interval_ticks`
//! ```
//!
//! All deferred work (arrivals, vehicle steps) is keyed on simulated
//! seconds, so a paused clock freezes it and `reset` discards it by bumping
//! the queue generation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`config`]    | `SimConfig` (JSON)                                       |
//! | [`inventory`] | `NodeState`, `Inventory`: rate engine                    |
//! | [`dispatch`]  | `Shipment`, `Arrival`, `Dispatcher`                      |
//! | [`emissions`] | `EmissionTotals`, `EmissionLedger`                       |
//! | [`history`]   | `ComparisonPoint`, `ComparisonHistory`                   |
//! | [`snapshot`]  | `Snapshot`, `NodeSnapshot`, `VehicleSnapshot`, `NodeInspection` |
//! | [`observer`]  | `SimObserver`, `NoopObserver`                            |
//! | [`builder`]   | `SimBuilder`                                             |
//! | [`sim`]       | `Simulation`                                             |

pub mod builder;
pub mod config;
pub mod dispatch;
pub mod emissions;
pub mod error;
pub mod history;
pub mod inventory;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use config::{SimConfig, DEFAULT_FRAME_SECS};
pub use dispatch::{should_dispatch, Arrival, Dispatcher, Shipment, DISPATCH_THRESHOLD};
pub use emissions::{EmissionLedger, EmissionTotals};
pub use error::{SimError, SimResult};
pub use history::{ComparisonHistory, ComparisonPoint};
pub use inventory::{Inventory, NodeState};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
pub use snapshot::{NodeInspection, NodeSnapshot, Snapshot, VehicleSnapshot};
