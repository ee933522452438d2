//! Error type for singleton construction.

/// Errors returned by construction attempts.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SingletonError {
    /// A construction was attempted while an instance already exists.
    #[error("only one instance can be created")]
    InstanceAlreadyExists,
}

/// Result alias for fallible singleton operations.
pub type Result<T, E = SingletonError> = std::result::Result<T, E>;
