//! Core error type.
//!
//! Higher crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`.

use thiserror::Error;

/// Errors raised by `sc-core` primitives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("speed multiplier must be strictly positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),
}

/// Shorthand result type for `sc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
