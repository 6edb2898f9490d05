//! Championship domain
//!
//! Championship entities, the geographic scope enum, the eligibility
//! predicate shared by the listing and enroll paths, validation, and the
//! repository trait.

mod eligibility;
mod entity;
mod repository;
mod validation;

pub use eligibility::is_eligible;
pub use entity::{Championship, ChampionshipId, ChampionshipScope};
pub use repository::ChampionshipRepository;
pub use validation::{
    validate_championship_id, validate_championship_name, validate_scope, validate_team_limits,
    ChampionshipValidationError, MAX_TEAMS_RANGE, MIN_TEAMS_RANGE,
};

#[cfg(test)]
pub use repository::mock::MockChampionshipRepository;
