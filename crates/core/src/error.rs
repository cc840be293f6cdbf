//! Domain error model.

use thiserror::Error;

/// Result type used at the boundary of the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The resolvers themselves are total and never produce one of these. Errors
/// only surface when a snapshot cannot be read at all, or when a caller asks
/// for a record that is not in the snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found in the snapshot.
    #[error("not found: {0}")]
    NotFound(String),

    /// A document could not be decoded.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}
