//! Network-description error type.

use thiserror::Error;

/// Configuration errors detected while building or loading a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("duplicate node key {0:?}")]
    DuplicateNode(String),

    #[error("duplicate route key {0:?}")]
    DuplicateRoute(String),

    #[error("route {route:?} references unknown node {node:?}")]
    UnknownNode { route: String, node: String },

    #[error("route {0:?} starts and ends at the same node")]
    SelfLoop(String),

    #[error("{what} of {id:?} is invalid: {value}")]
    InvalidValue {
        id:    String,
        what:  &'static str,
        value: f64,
    },

    #[error("node {id:?} starts with stock {stock} above its capacity {capacity}")]
    StockAboveCapacity { id: String, stock: f64, capacity: f64 },

    #[error("{0:?} has coordinates outside the WGS-84 range")]
    InvalidCoordinates(String),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
