//! Team domain
//!
//! Football team entities, the derived overall rating, validation, and the
//! repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{SkillSet, Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{
    validate_color, validate_country, validate_skill_level, validate_team_id, validate_team_name,
    TeamValidationError, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL,
};

#[cfg(test)]
pub use repository::mock::MockTeamRepository;
