// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A value object refused its input; the message is user-facing.
    #[error("validation error: {0}")]
    Validation(String),
    /// The store rejected a write that would break email uniqueness.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage failure. Never shown to clients verbatim.
    #[error("persistence error: {0}")]
    Persistence(String),
}
