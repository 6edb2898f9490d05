use thiserror::Error;

/// Errors shared by every domain service
///
/// Constructors take `impl Into<String>` so call sites can pass literals or
/// formatted messages without ceremony. The API layer decides the HTTP
/// status per variant, so services never need to know about status codes.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The account, team, championship or enrollment does not exist, or is
    /// owned by someone else (the two are indistinguishable on purpose)
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A field value outside the documented bounds
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A path or payload ID that fails ID syntax rules, as opposed to a
    /// well-formed ID that matches nothing
    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    /// The request collides with existing state, e.g. a registered email
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// A bug or broken invariant on our side
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// A backend failure (connection, query, poisoned lock) as opposed to
    /// a well-formed request the domain rejected
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
