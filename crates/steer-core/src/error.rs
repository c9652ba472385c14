//! Framework error type.
//!
//! Sub-crates define their own error enums; `steer-sim` maps `SteerError`
//! into its own `SimError::Config`.

use thiserror::Error;

/// The error type for `steer-core`.
#[derive(Debug, Error)]
pub enum SteerError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `steer-*` crates.
pub type SteerResult<T> = Result<T, SteerError>;
