//! The valuation request lifecycle. `transitions` holds the pure guards;
//! the transactional application of each transition lives in `db::requests`
//! and `db::appointments`, which re-check the guard on a row locked inside
//! the transaction.

pub mod transitions;

use thiserror::Error;

/// User-facing lifecycle failures. Both variants are expected outcomes and
/// are reported with a corrective message; neither leaves partial state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),
    /// The transition is incompatible with the current state; the request
    /// is left unchanged.
    #[error("{0}")]
    Guard(String),
}

impl LifecycleError {
    pub fn validation(message: impl Into<String>) -> Self {
        LifecycleError::Validation(message.into())
    }

    pub fn guard(message: impl Into<String>) -> Self {
        LifecycleError::Guard(message.into())
    }
}
