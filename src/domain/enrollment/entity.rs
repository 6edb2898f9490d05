//! Enrollment join entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::championship::ChampionshipId;
use crate::domain::team::TeamId;

/// Enrollment of a team in a championship
///
/// At most one enrollment exists per (championship, team) pair; the
/// repositories enforce that as a constraint, not a convention. Created only
/// by the enroll operation, destroyed only by remove or cascade deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    championship_id: ChampionshipId,
    team_id: TeamId,
    enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create a new enrollment stamped with the current time
    pub fn new(championship_id: ChampionshipId, team_id: TeamId) -> Self {
        Self {
            championship_id,
            team_id,
            enrolled_at: Utc::now(),
        }
    }

    pub fn championship_id(&self) -> &ChampionshipId {
        &self.championship_id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    /// Rebuild an enrollment from stored fields (repository use)
    pub fn from_parts(
        championship_id: ChampionshipId,
        team_id: TeamId,
        enrolled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            championship_id,
            team_id,
            enrolled_at,
        }
    }
}
