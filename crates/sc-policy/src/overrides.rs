//! Declarative per-target rate and routing overrides.

use std::collections::HashMap;

use sc_core::{NodeId, RouteId, TransportMode};
use sc_network::Route;

// ── Adjust ────────────────────────────────────────────────────────────────────

/// One rule applied to a base value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Adjust {
    /// Multiply the base value.
    Scale(f64),
    /// Replace the base value.
    Set(f64),
    /// Force the value to zero.
    Zero,
}

impl Adjust {
    #[inline]
    pub fn apply(self, base: f64) -> f64 {
        match self {
            Adjust::Scale(f) => base * f,
            Adjust::Set(v)   => v,
            Adjust::Zero     => 0.0,
        }
    }

    /// The numeric operand, if any.
    pub fn operand(self) -> Option<f64> {
        match self {
            Adjust::Scale(v) | Adjust::Set(v) => Some(v),
            Adjust::Zero => None,
        }
    }
}

/// The node rates a scenario can touch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeField {
    /// Manufacturing output rate.
    Production,
    /// Retail sell-through rate.
    Sales,
    /// Size of shipments leaving the node.  `Zero` suppresses dispatch.
    Outbound,
}

impl NodeField {
    pub const ALL: [NodeField; 3] = [NodeField::Production, NodeField::Sales, NodeField::Outbound];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeField::Production => "production",
            NodeField::Sales      => "sales",
            NodeField::Outbound   => "outbound",
        }
    }
}

// ── Per-target rules ──────────────────────────────────────────────────────────

/// Rules for one node.  `None` leaves the field at its base value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NodeOverride {
    pub production: Option<Adjust>,
    pub sales:      Option<Adjust>,
    pub outbound:   Option<Adjust>,
}

impl NodeOverride {
    #[inline]
    pub fn get(&self, field: NodeField) -> Option<Adjust> {
        match field {
            NodeField::Production => self.production,
            NodeField::Sales      => self.sales,
            NodeField::Outbound   => self.outbound,
        }
    }

    pub fn set(&mut self, field: NodeField, adjust: Adjust) {
        let slot = match field {
            NodeField::Production => &mut self.production,
            NodeField::Sales      => &mut self.sales,
            NodeField::Outbound   => &mut self.outbound,
        };
        *slot = Some(adjust);
    }
}

/// Rules for one route.
///
/// A mode override re-books the route's emissions into another bucket; it
/// does not change speed or timing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RouteOverride {
    pub mode:            Option<TransportMode>,
    pub emission_factor: Option<Adjust>,
}

// ── OverrideTable ─────────────────────────────────────────────────────────────

/// All rules of one scenario.  An empty table is the identity.
#[derive(Clone, Debug, Default)]
pub struct OverrideTable {
    nodes:  HashMap<NodeId, NodeOverride>,
    routes: HashMap<RouteId, RouteOverride>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.routes.is_empty()
    }

    /// Install `adjust` for `field` of `node`, replacing any previous rule.
    pub fn set_node(&mut self, node: NodeId, field: NodeField, adjust: Adjust) -> &mut Self {
        self.nodes.entry(node).or_default().set(field, adjust);
        self
    }

    pub fn set_route_mode(&mut self, route: RouteId, mode: TransportMode) -> &mut Self {
        self.routes.entry(route).or_default().mode = Some(mode);
        self
    }

    pub fn set_route_emission_factor(&mut self, route: RouteId, adjust: Adjust) -> &mut Self {
        self.routes.entry(route).or_default().emission_factor = Some(adjust);
        self
    }

    pub fn node_rule(&self, node: NodeId) -> Option<&NodeOverride> {
        self.nodes.get(&node)
    }

    /// `base` passed through the rule for `field` of `node`, if any.
    #[inline]
    pub fn adjust(&self, node: NodeId, field: NodeField, base: f64) -> f64 {
        match self.nodes.get(&node).and_then(|o| o.get(field)) {
            Some(rule) => rule.apply(base),
            None => base,
        }
    }

    #[inline]
    pub fn production(&self, node: NodeId, base: f64) -> f64 {
        self.adjust(node, NodeField::Production, base)
    }

    #[inline]
    pub fn sales(&self, node: NodeId, base: f64) -> f64 {
        self.adjust(node, NodeField::Sales, base)
    }

    #[inline]
    pub fn outbound(&self, node: NodeId, base: f64) -> f64 {
        self.adjust(node, NodeField::Outbound, base)
    }

    /// `true` if shipments out of `node` are suppressed outright.
    pub fn blocks_outbound(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .and_then(|o| o.outbound)
            .is_some_and(|rule| rule.apply(1.0) == 0.0)
    }

    /// The mode emissions on `route` are booked under.
    pub fn effective_mode(&self, route: &Route) -> TransportMode {
        self.routes
            .get(&route.id)
            .and_then(|o| o.mode)
            .unwrap_or(route.mode)
    }

    /// kg CO₂ per unit per km for shipments on `route`.
    pub fn effective_emission_factor(&self, route: &Route) -> f64 {
        match self.routes.get(&route.id).and_then(|o| o.emission_factor) {
            Some(rule) => rule.apply(route.emission_factor),
            None => route.emission_factor,
        }
    }

    /// Every operand in the table, for validation.
    pub(crate) fn operands(&self) -> impl Iterator<Item = f64> + '_ {
        let node_ops = self.nodes.values().flat_map(|o| {
            NodeField::ALL.into_iter().filter_map(|f| o.get(f).and_then(Adjust::operand))
        });
        let route_ops = self
            .routes
            .values()
            .filter_map(|o| o.emission_factor.and_then(Adjust::operand));
        node_ops.chain(route_ops)
    }
}
