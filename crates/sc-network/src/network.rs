//! Network representation and builder.
//!
//! Nodes and routes live in two `Vec`s indexed by [`NodeId`] and
//! [`RouteId`]; string keys are only used at build time and for lookups from
//! the outside (scenario targets, user queries).

use std::collections::HashMap;

use tracing::{debug, warn};

use sc_core::geo::path_length_km;
use sc_core::{NodeId, RouteId};

use crate::{Node, NetworkError, NetworkResult, Route, RouteSpec, NodeSpec};

// ── Network ───────────────────────────────────────────────────────────────────

/// The immutable supply network.
///
/// Do not construct directly; use [`NetworkBuilder`].
#[derive(Clone, Debug)]
pub struct Network {
    nodes:       Vec<Node>,
    routes:      Vec<Route>,
    node_index:  HashMap<String, NodeId>,
    route_index: HashMap<String, RouteId>,
}

impl Network {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// # Panics
    /// Panics if `id` was not issued by this network.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not issued by this network.
    #[inline]
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.node_index.get(key).copied()
    }

    pub fn route_id(&self, key: &str) -> Option<RouteId> {
        self.route_index.get(key).copied()
    }

    pub fn node_by_key(&self, key: &str) -> Option<&Node> {
        self.node_id(key).map(|id| self.node(id))
    }

    pub fn route_by_key(&self, key: &str) -> Option<&Route> {
        self.route_id(key).map(|id| self.route(id))
    }

    /// Routes leaving `node`, in route-id order.
    pub fn routes_from(&self, node: NodeId) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter().filter(move |r| r.from == node)
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Collect node and route specs, then validate everything in
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use sc_core::{GeoPoint, TransportMode};
/// use sc_network::{NetworkBuilder, NodeCategory, NodeSpec, RouteSpec};
///
/// let mut b = NetworkBuilder::new();
/// b.add_node(NodeSpec::new("MILL", GeoPoint::new(57.75, 14.50), NodeCategory::RawMaterial)
///     .stock(5_000.0, 10_000.0));
/// b.add_node(NodeSpec::new("FACTORY", GeoPoint::new(52.24, 15.91), NodeCategory::manufacturing())
///     .stock(2_000.0, 15_000.0));
/// b.add_route(RouteSpec::new("mill_factory", "MILL", "FACTORY", TransportMode::Road)
///     .vehicle(600.0, 80.0)
///     .emission_factor(0.057)
///     .frequency_days(2.0));
/// let net = b.build().unwrap();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.route(net.route_id("mill_factory").unwrap()).path.len(), 2);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    nodes:  Vec<NodeSpec>,
    routes: Vec<RouteSpec>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a node.  Ids are assigned in insertion order at build time.
    pub fn add_node(&mut self, spec: NodeSpec) -> &mut Self {
        self.nodes.push(spec);
        self
    }

    /// Queue a route.  Ids are assigned in insertion order at build time.
    pub fn add_route(&mut self, spec: RouteSpec) -> &mut Self {
        self.routes.push(spec);
        self
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn route_count(&self) -> usize { self.routes.len() }

    /// Validate and freeze the network.
    ///
    /// # Errors
    ///
    /// The first configuration problem found, in node order then route order.
    pub fn build(self) -> NetworkResult<Network> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut node_index = HashMap::with_capacity(self.nodes.len());

        for spec in self.nodes {
            validate_node(&spec)?;
            let id = NodeId::try_from(nodes.len())
                .map_err(|_| NetworkError::Parse("too many nodes".into()))?;
            if node_index.insert(spec.key.clone(), id).is_some() {
                return Err(NetworkError::DuplicateNode(spec.key));
            }
            nodes.push(Node {
                id,
                key:           spec.key,
                name:          spec.name,
                product:       spec.product,
                pos:           spec.pos,
                category:      spec.category,
                capacity:      spec.capacity,
                initial_stock: spec.initial_stock,
            });
        }

        let mut routes = Vec::with_capacity(self.routes.len());
        let mut route_index = HashMap::with_capacity(self.routes.len());

        for spec in self.routes {
            validate_route(&spec)?;
            let resolve = |key: &str| {
                node_index.get(key).copied().ok_or_else(|| NetworkError::UnknownNode {
                    route: spec.key.clone(),
                    node:  key.to_owned(),
                })
            };
            let from = resolve(&spec.from)?;
            let to = resolve(&spec.to)?;
            if from == to {
                return Err(NetworkError::SelfLoop(spec.key));
            }

            let id = RouteId::try_from(routes.len())
                .map_err(|_| NetworkError::Parse("too many routes".into()))?;
            if route_index.insert(spec.key.clone(), id).is_some() {
                return Err(NetworkError::DuplicateRoute(spec.key));
            }

            let src = nodes[from.index()].pos;
            let dst = nodes[to.index()].pos;
            let (path, path_fallback) = match spec.path {
                Some(p) if p.len() >= 2 => {
                    if p.iter().any(|pt| !pt.is_valid()) {
                        return Err(NetworkError::InvalidCoordinates(spec.key));
                    }
                    (p, false)
                }
                _ => {
                    warn!(route = %spec.key, "route geometry unavailable, using straight path");
                    (vec![src, dst], true)
                }
            };

            routes.push(Route {
                id,
                key:              spec.key,
                from,
                to,
                mode:             spec.mode,
                distance_km:      src.distance_km(dst),
                path_length_km:   path_length_km(&path),
                path,
                vehicle_capacity: spec.vehicle_capacity,
                speed_kmh:        spec.speed_kmh,
                emission_factor:  spec.emission_factor,
                frequency_days:   spec.frequency_days,
                path_fallback,
            });
        }

        debug!(nodes = nodes.len(), routes = routes.len(), "network built");

        Ok(Network { nodes, routes, node_index, route_index })
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn non_negative(id: &str, what: &'static str, value: f64) -> NetworkResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidValue { id: id.to_owned(), what, value })
    }
}

fn positive(id: &str, what: &'static str, value: f64) -> NetworkResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidValue { id: id.to_owned(), what, value })
    }
}

fn validate_node(spec: &NodeSpec) -> NetworkResult<()> {
    if !spec.pos.is_valid() {
        return Err(NetworkError::InvalidCoordinates(spec.key.clone()));
    }
    non_negative(&spec.key, "capacity", spec.capacity)?;
    non_negative(&spec.key, "initial stock", spec.initial_stock)?;
    non_negative(&spec.key, "production rate", spec.category.base_production_rate())?;
    non_negative(&spec.key, "sales rate", spec.category.base_sales_rate())?;
    if spec.initial_stock > spec.capacity {
        return Err(NetworkError::StockAboveCapacity {
            id:       spec.key.clone(),
            stock:    spec.initial_stock,
            capacity: spec.capacity,
        });
    }
    Ok(())
}

fn validate_route(spec: &RouteSpec) -> NetworkResult<()> {
    positive(&spec.key, "vehicle capacity", spec.vehicle_capacity)?;
    positive(&spec.key, "speed", spec.speed_kmh)?;
    non_negative(&spec.key, "emission factor", spec.emission_factor)?;
    positive(&spec.key, "shipment frequency", spec.frequency_days)?;
    Ok(())
}
