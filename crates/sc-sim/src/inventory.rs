//! Inventory and rate engine.
//!
//! Per tick, for a tick of `dt_hours`:
//!
//! | Category       | Rate                                         | Stock update                         |
//! |----------------|----------------------------------------------|--------------------------------------|
//! | Manufacturing  | `production(base × seasonal)`                | `min(capacity, stock + rate × dt)`   |
//! | Retail         | `sales(base × seasonal)`                     | `max(0, stock − rate × dt)`          |
//! | Raw / hub      | —                                            | shipments only                       |
//!
//! `production` and `sales` are the active scenario's override lookups.

use sc_core::NodeId;
use sc_network::{Network, NodeCategory};
use sc_policy::OverrideTable;

/// Live state of one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeState {
    pub stock:           f64,
    pub capacity:        f64,
    /// Effective units/hour produced during the last tick.
    pub production_rate: f64,
    /// Effective units/hour sold during the last tick.
    pub sales_rate:      f64,
    /// Units that arrived during the last tick.
    pub inbound:         f64,
    /// Units that departed during the last tick.
    pub outbound:        f64,
}

impl NodeState {
    fn initial(stock: f64, capacity: f64) -> Self {
        Self {
            stock,
            capacity,
            production_rate: 0.0,
            sales_rate:      0.0,
            inbound:         0.0,
            outbound:        0.0,
        }
    }
}

/// Stock for every node, indexed by `NodeId`.
#[derive(Clone, Debug)]
pub struct Inventory {
    pub states: Vec<NodeState>,
}

impl Inventory {
    /// Every node at its configured initial stock.
    pub fn new(network: &Network) -> Self {
        Self {
            states: network
                .nodes()
                .iter()
                .map(|n| NodeState::initial(n.initial_stock, n.capacity))
                .collect(),
        }
    }

    /// Restore every node to its configured initial stock.
    pub fn reset(&mut self, network: &Network) {
        for (state, node) in self.states.iter_mut().zip(network.nodes()) {
            *state = NodeState::initial(node.initial_stock, node.capacity);
        }
    }

    #[inline]
    pub fn get(&self, node: NodeId) -> &NodeState {
        &self.states[node.index()]
    }

    #[inline]
    pub fn stock(&self, node: NodeId) -> f64 {
        self.states[node.index()].stock
    }

    /// Zero the per-tick inbound/outbound counters.
    pub fn begin_tick(&mut self) {
        for state in &mut self.states {
            state.inbound = 0.0;
            state.outbound = 0.0;
        }
    }

    /// Apply production and sales for one tick.
    pub fn apply_rates(
        &mut self,
        network:   &Network,
        overrides: &OverrideTable,
        seasonal:  f64,
        dt_hours:  f64,
    ) {
        for (state, node) in self.states.iter_mut().zip(network.nodes()) {
            match node.category {
                NodeCategory::Manufacturing { base_production_rate } => {
                    let rate = overrides.production(node.id, base_production_rate * seasonal);
                    state.production_rate = rate;
                    state.stock = (state.stock + rate * dt_hours).min(state.capacity);
                }
                NodeCategory::Retail { base_sales_rate } => {
                    let rate = overrides.sales(node.id, base_sales_rate * seasonal);
                    state.sales_rate = rate;
                    state.stock = (state.stock - rate * dt_hours).max(0.0);
                }
                NodeCategory::RawMaterial | NodeCategory::Distribution => {}
            }
        }
    }

    /// Take `amount` out of `node` for a departing shipment.
    pub fn debit(&mut self, node: NodeId, amount: f64) {
        let state = &mut self.states[node.index()];
        state.stock = (state.stock - amount).max(0.0);
        state.outbound += amount;
    }

    /// Add an arriving shipment to `node`.  Returns the units that fit; the
    /// rest is lost.
    pub fn credit(&mut self, node: NodeId, amount: f64) -> f64 {
        let state = &mut self.states[node.index()];
        let before = state.stock;
        state.stock = (state.stock + amount).min(state.capacity);
        state.inbound += amount;
        state.stock - before
    }

    /// First node whose stock is not a finite number, if any.
    pub fn first_non_finite(&self) -> Option<NodeId> {
        self.states
            .iter()
            .position(|s| !s.stock.is_finite())
            .map(|i| NodeId(i as u32))
    }
}
