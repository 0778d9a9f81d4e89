//! JSON network loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "nodes": [
//!     { "key": "FACTORY", "name": "Assembly plant", "product": "Bookshelves",
//!       "coords": [52.24, 15.91], "type": "manufacturing",
//!       "capacity": 15000, "initial_stock": 2000, "production_rate": 50 }
//!   ],
//!   "routes": [
//!     { "key": "factory_dc", "from": "FACTORY", "to": "DC", "mode": "road",
//!       "path": [[52.24, 15.91], [51.51, 7.46]],
//!       "capacity": 600, "speed": 80, "emission": 0.057, "frequency": 1 }
//!   ]
//! }
//! ```
//!
//! `type` is one of `raw_materials`, `manufacturing`, `distribution`,
//! `retail`.  `production_rate` / `sales_rate` are optional and only read for
//! the matching category.  `path` is optional; see
//! [`RouteSpec::path`](crate::RouteSpec::path) for the fallback.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sc_core::{GeoPoint, TransportMode};

use crate::{
    Network, NetworkBuilder, NetworkError, NetworkResult, NodeCategory, NodeSpec, RouteSpec,
    DEFAULT_PRODUCTION_RATE, DEFAULT_SALES_RATE,
};

#[derive(Debug, Deserialize)]
struct NetworkRecord {
    nodes:  Vec<NodeRecord>,
    #[serde(default)]
    routes: Vec<RouteRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    key:             String,
    #[serde(default)]
    name:            Option<String>,
    #[serde(default)]
    product:         String,
    coords:          [f64; 2],
    #[serde(rename = "type")]
    category:        String,
    capacity:        f64,
    initial_stock:   f64,
    #[serde(default)]
    production_rate: Option<f64>,
    #[serde(default)]
    sales_rate:      Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RouteRecord {
    key:       String,
    from:      String,
    to:        String,
    mode:      String,
    #[serde(default)]
    path:      Option<Vec<[f64; 2]>>,
    capacity:  f64,
    speed:     f64,
    emission:  f64,
    frequency: f64,
}

/// Load and validate a network from a JSON file.
pub fn load_network_json(path: &Path) -> NetworkResult<Network> {
    let file = std::fs::File::open(path)?;
    load_network_reader(std::io::BufReader::new(file))
}

/// Like [`load_network_json`] but accepts any `Read` source.
pub fn load_network_reader<R: Read>(reader: R) -> NetworkResult<Network> {
    let record: NetworkRecord = serde_json::from_reader(reader)?;

    let mut builder = NetworkBuilder::new();
    for n in record.nodes {
        let category = parse_category(&n)?;
        let mut spec = NodeSpec::new(n.key, point(n.coords), category)
            .product(n.product)
            .stock(n.initial_stock, n.capacity);
        if let Some(name) = n.name {
            spec = spec.name(name);
        }
        builder.add_node(spec);
    }

    for r in record.routes {
        let mode: TransportMode = r.mode.parse().map_err(|e| {
            NetworkError::Parse(format!("route {:?}: {e}", r.key))
        })?;
        let mut spec = RouteSpec::new(r.key, r.from, r.to, mode)
            .vehicle(r.capacity, r.speed)
            .emission_factor(r.emission)
            .frequency_days(r.frequency);
        if let Some(path) = r.path {
            spec = spec.path(path.into_iter().map(point).collect());
        }
        builder.add_route(spec);
    }

    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn point([lat, lon]: [f64; 2]) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

fn parse_category(n: &NodeRecord) -> NetworkResult<NodeCategory> {
    match n.category.trim() {
        "raw_materials" | "raw_material" => Ok(NodeCategory::RawMaterial),
        "manufacturing" => Ok(NodeCategory::Manufacturing {
            base_production_rate: n.production_rate.unwrap_or(DEFAULT_PRODUCTION_RATE),
        }),
        "distribution" => Ok(NodeCategory::Distribution),
        "retail" => Ok(NodeCategory::Retail {
            base_sales_rate: n.sales_rate.unwrap_or(DEFAULT_SALES_RATE),
        }),
        other => Err(NetworkError::Parse(format!(
            "node {:?}: unknown type {other:?}: expected raw_materials, manufacturing, \
             distribution, or retail",
            n.key
        ))),
    }
}
