//! Domain error model.

use thiserror::Error;

use crate::sequence::LoadToken;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of domain values and state
/// transitions. File-level ingest failures have their own type in the listings
/// crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A load completed after a newer one had already been applied.
    #[error("{token} is not newer than applied {current}")]
    StaleLoad { token: LoadToken, current: LoadToken },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn stale_load(token: LoadToken, current: LoadToken) -> Self {
        Self::StaleLoad { token, current }
    }
}
