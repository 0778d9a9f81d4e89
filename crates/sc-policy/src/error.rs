use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("unknown scenario {0:?}: expected baseline, green_rail, or local_source")]
    UnknownScenario(String),

    #[error("scenario {scenario} targets unknown {kind} {key:?}")]
    UnknownTarget {
        scenario: &'static str,
        kind:     &'static str,
        key:      String,
    },

    #[error("scenario {scenario}: {what} must be finite and non-negative, got {value}")]
    InvalidFactor {
        scenario: &'static str,
        what:     &'static str,
        value:    f64,
    },
}

pub type PolicyResult<T> = Result<T, PolicyError>;
