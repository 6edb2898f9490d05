//! Enrollment error taxonomy

use thiserror::Error;

use crate::domain::DomainError;

/// Outcome taxonomy for the enroll and remove operations.
///
/// Callers map these to their own presentation; no message inspection is
/// ever needed to tell the kinds apart.
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// Championship or team does not exist, or is not owned by the
    /// requesting account. Existence and ownership are deliberately
    /// indistinguishable so foreign entities are never revealed.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The championship roster is already at its maximum size
    #[error("Championship roster is full")]
    CapacityExceeded,

    /// The team does not fall inside the championship's scope
    #[error("Team is not eligible for this championship")]
    NotEligible,

    /// An enrollment for this (championship, team) pair already exists
    #[error("Team is already enrolled in this championship")]
    AlreadyEnrolled,

    /// The data store failed. Retrying the whole operation is safe; nothing
    /// was partially applied.
    #[error("Enrollment store unavailable: {message}")]
    Unavailable { message: String },
}

impl EnrollmentError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Repository failures surface as Unavailable; absence decisions stay with
/// the engine.
impl From<DomainError> for EnrollmentError {
    fn from(error: DomainError) -> Self {
        Self::Unavailable {
            message: error.to_string(),
        }
    }
}

/// Failure modes of the guarded roster insert.
///
/// The insert is the serialization point for the capacity and uniqueness
/// invariants, so it must report which one was violated.
#[derive(Debug, Error)]
pub enum RosterInsertError {
    /// An enrollment for the pair already exists
    #[error("Enrollment already exists for this championship and team")]
    Duplicate,

    /// The roster is at its maximum size
    #[error("Championship roster is at capacity")]
    Full,

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] DomainError),
}

impl From<RosterInsertError> for EnrollmentError {
    fn from(error: RosterInsertError) -> Self {
        match error {
            RosterInsertError::Duplicate => Self::AlreadyEnrolled,
            RosterInsertError::Full => Self::CapacityExceeded,
            RosterInsertError::Store(e) => Self::Unavailable {
                message: e.to_string(),
            },
        }
    }
}
