//! `sc-policy` — scenario overlays on top of an immutable network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`overrides`] | `Adjust`, `NodeField`, `NodeOverride`, `RouteOverride`, `OverrideTable` |
//! | [`scenario`]  | `ScenarioId`, `Scenario`, `ScenarioCatalog`, `PolicyTargets` |
//! | [`error`]     | `PolicyError`, `PolicyResult<T>`                            |
//!
//! # Override model
//!
//! A scenario never touches network data.  It is a table of rules keyed by
//! `NodeId` / `RouteId`; the rate engine and the dispatcher read every
//! rate through the active table:
//!
//! ```text
//! production = table.production(node, base × seasonality)
//! sales      = table.sales(node, base × seasonality)
//! size       = table.outbound(source, min(capacity, stock))
//! bucket     = table.effective_mode(route).emission_bucket()
//! emissions  = size × distance × table.effective_emission_factor(route)
//! ```
//!
//! A target with no rule passes the base value through unchanged.

pub mod error;
pub mod overrides;
pub mod scenario;


pub use error::{PolicyError, PolicyResult};
pub use overrides::{Adjust, NodeField, NodeOverride, OverrideTable, RouteOverride};
pub use scenario::{PolicyTargets, Scenario, ScenarioCatalog, ScenarioId};
