//! Domain layer - Core business logic and entities

pub mod championship;
pub mod enrollment;
pub mod error;
pub mod geo;
pub mod team;
pub mod user;

pub use championship::{
    is_eligible, Championship, ChampionshipId, ChampionshipRepository, ChampionshipScope,
    ChampionshipValidationError,
};
pub use enrollment::{Enrollment, EnrollmentError, EnrollmentRepository, RosterInsertError};
pub use error::DomainError;
pub use geo::Continent;
pub use team::{SkillSet, Team, TeamId, TeamRepository, TeamValidationError};
pub use user::{User, UserId, UserRepository, UserValidationError};
