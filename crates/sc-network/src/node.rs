//! Facilities.

use sc_core::{GeoPoint, NodeId};

/// Base manufacturing output in units per hour, before seasonality and
/// scenario adjustments.
pub const DEFAULT_PRODUCTION_RATE: f64 = 50.0;

/// Base retail sell-through in units per hour, before seasonality and
/// scenario adjustments.
pub const DEFAULT_SALES_RATE: f64 = 20.0;

/// What a facility does.  Only manufacturers produce and only retailers
/// sell; the other two categories change stock through shipments alone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeCategory {
    RawMaterial,
    Manufacturing { base_production_rate: f64 },
    Distribution,
    Retail { base_sales_rate: f64 },
}

impl NodeCategory {
    /// A manufacturer at [`DEFAULT_PRODUCTION_RATE`].
    pub fn manufacturing() -> Self {
        NodeCategory::Manufacturing { base_production_rate: DEFAULT_PRODUCTION_RATE }
    }

    /// A retailer at [`DEFAULT_SALES_RATE`].
    pub fn retail() -> Self {
        NodeCategory::Retail { base_sales_rate: DEFAULT_SALES_RATE }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::RawMaterial        => "raw_materials",
            NodeCategory::Manufacturing { .. } => "manufacturing",
            NodeCategory::Distribution       => "distribution",
            NodeCategory::Retail { .. }      => "retail",
        }
    }

    pub fn base_production_rate(&self) -> f64 {
        match *self {
            NodeCategory::Manufacturing { base_production_rate } => base_production_rate,
            _ => 0.0,
        }
    }

    pub fn base_sales_rate(&self) -> f64 {
        match *self {
            NodeCategory::Retail { base_sales_rate } => base_sales_rate,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder input for one facility.
#[derive(Clone, Debug)]
pub struct NodeSpec {
    /// Unique key routes use to refer to this node.
    pub key:           String,
    /// Display name.
    pub name:          String,
    /// What is stocked here (timber, fittings, finished goods…).
    pub product:       String,
    pub pos:           GeoPoint,
    pub category:      NodeCategory,
    pub capacity:      f64,
    pub initial_stock: f64,
}

impl NodeSpec {
    pub fn new(key: impl Into<String>, pos: GeoPoint, category: NodeCategory) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            product: String::new(),
            pos,
            category,
            capacity: 0.0,
            initial_stock: 0.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    pub fn stock(mut self, initial_stock: f64, capacity: f64) -> Self {
        self.initial_stock = initial_stock;
        self.capacity = capacity;
        self
    }
}

/// A validated facility.  Category and capacity never change after build.
#[derive(Clone, Debug)]
pub struct Node {
    pub id:            NodeId,
    pub key:           String,
    pub name:          String,
    pub product:       String,
    pub pos:           GeoPoint,
    pub category:      NodeCategory,
    pub capacity:      f64,
    pub initial_stock: f64,
}
