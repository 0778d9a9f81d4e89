//! `sc-network` — the immutable description of a supply network.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`node`]    | `NodeCategory`, `NodeSpec`, `Node`                          |
//! | [`route`]   | `RouteSpec`, `Route`                                        |
//! | [`network`] | `Network`, `NetworkBuilder` (validation, path fallback)     |
//! | [`loader`]  | `load_network_json`, `load_network_reader`                  |
//! | [`preset`]  | `european_network`: the ten-facility reference network     |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! A network is built once, before the first tick, and never changes
//! afterwards.  Every problem with the description is reported by
//! [`NetworkBuilder::build`]; nothing in the tick pipeline re-validates.

pub mod error;
pub mod loader;
pub mod network;
pub mod node;
pub mod preset;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_json, load_network_reader};
pub use network::{Network, NetworkBuilder};
pub use node::{Node, NodeCategory, NodeSpec, DEFAULT_PRODUCTION_RATE, DEFAULT_SALES_RATE};
pub use preset::european_network;
pub use route::{Route, RouteSpec};
