use sc_core::CoreError;
use sc_network::NetworkError;
use sc_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("unknown node {0:?}")]
    UnknownNode(String),

    /// A tick produced a value the engine cannot continue from.  The clock
    /// has been paused.
    #[error("tick {tick}: corrupt state: {what}")]
    CorruptState { tick: u64, what: String },

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
