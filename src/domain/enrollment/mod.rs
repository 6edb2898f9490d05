//! Enrollment domain
//!
//! The join entity linking teams to championship rosters, the typed outcome
//! taxonomy of the enroll/remove operations, and the repository trait whose
//! guarded insert carries the capacity and uniqueness invariants.

mod entity;
mod error;
mod repository;

pub use entity::Enrollment;
pub use error::{EnrollmentError, RosterInsertError};
pub use repository::EnrollmentRepository;

#[cfg(test)]
pub use repository::MockEnrollmentRepository;
