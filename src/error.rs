//! Error types shared across the engine
//!
//! Policy denials are never errors in this crate: a denied admission is an
//! ordinary [`AdmissionResult`](crate::admission::AdmissionResult) value.
//! The variants here cover the remaining failure classes: illegal lifecycle
//! transitions, malformed input, and collaborator failures.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Errors raised by the admission engine and the entity lifecycles.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An illegal lifecycle transition was attempted (e.g. check-out
    /// before check-in, renewing a revoked authorization).
    #[error("illegal transition: {0}")]
    State(String),

    /// A required input was missing or malformed (e.g. an empty
    /// cancellation reason, a non-numeric national id).
    #[error("invalid input: {0}")]
    Validation(String),

    /// A repository collaborator failed. Always distinct from a policy
    /// denial: callers must never present this as "access denied".
    #[error("repository failure during {context}: {source}")]
    Infrastructure {
        /// The operation that was in flight when the collaborator failed.
        context: String,
        /// The underlying repository failure.
        #[source]
        source: RepositoryError,
    },
}

impl EngineError {
    /// Create a state error.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap a repository failure with the operation context.
    pub fn infrastructure(context: impl Into<String>, source: RepositoryError) -> Self {
        Self::Infrastructure { context: context.into(), source }
    }

    /// Check whether this error originated in a collaborator rather than
    /// in the engine's own rules.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Infrastructure { .. })
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
