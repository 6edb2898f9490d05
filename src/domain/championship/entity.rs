//! Championship entity and scope types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_championship_id, validate_championship_name, validate_scope, validate_team_limits,
    ChampionshipValidationError,
};
use crate::domain::geo::Continent;
use crate::domain::team::Team;
use crate::domain::user::UserId;

/// Championship identifier - alphanumeric + hyphens, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChampionshipId(String);

impl ChampionshipId {
    /// Validate and wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Result<Self, ChampionshipValidationError> {
        let id = id.into();
        validate_championship_id(&id)?;
        Ok(Self(id))
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChampionshipId {
    type Error = ChampionshipValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChampionshipId> for String {
    fn from(id: ChampionshipId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChampionshipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic scope of a championship
///
/// Each level carries only its own qualifier, so a national championship can
/// never hold a continent and vice versa. Serialized with an internal
/// `level` tag: `{"level": "national", "country": "Brazil"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum ChampionshipScope {
    /// Open to teams from one country
    National { country: String },
    /// Open to teams from one continent
    Continental { continent: Continent },
    /// Open to every team
    Global,
}

impl ChampionshipScope {
    /// Level name as used on the wire and in the database
    pub fn level(&self) -> &'static str {
        match self {
            Self::National { .. } => "national",
            Self::Continental { .. } => "continental",
            Self::Global => "global",
        }
    }

    /// Whether a team falls inside this scope.
    ///
    /// National compares countries by case-sensitive exact match,
    /// continental compares the continent values, global admits everyone.
    pub fn admits(&self, team: &Team) -> bool {
        match self {
            Self::National { country } => team.country() == country,
            Self::Continental { continent } => team.continent() == *continent,
            Self::Global => true,
        }
    }
}

impl std::fmt::Display for ChampionshipScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::National { country } => write!(f, "national ({})", country),
            Self::Continental { continent } => write!(f, "continental ({})", continent),
            Self::Global => write!(f, "global"),
        }
    }
}

/// Championship entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Championship {
    /// Unique identifier
    id: ChampionshipId,
    /// Owning account
    owner_id: UserId,
    /// Display name
    name: String,
    /// Geographic scope
    #[serde(flatten)]
    scope: ChampionshipScope,
    /// Minimum roster size (informational; not enforced at enrollment)
    min_teams: u32,
    /// Maximum roster size (hard ceiling enforced at enrollment)
    max_teams: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Championship {
    /// Create a new championship, validating every field
    pub fn new(
        id: ChampionshipId,
        owner_id: UserId,
        name: impl Into<String>,
        scope: ChampionshipScope,
        min_teams: u32,
        max_teams: u32,
    ) -> Result<Self, ChampionshipValidationError> {
        let name = name.into();

        validate_championship_name(&name)?;
        validate_scope(&scope)?;
        validate_team_limits(min_teams, max_teams)?;

        let now = Utc::now();

        Ok(Self {
            id,
            owner_id,
            name,
            scope,
            min_teams,
            max_teams,
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> &ChampionshipId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &ChampionshipScope {
        &self.scope
    }

    pub fn min_teams(&self) -> u32 {
        self.min_teams
    }

    pub fn max_teams(&self) -> u32 {
        self.max_teams
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ChampionshipValidationError> {
        let name = name.into();
        validate_championship_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replace the scope
    pub fn set_scope(&mut self, scope: ChampionshipScope) -> Result<(), ChampionshipValidationError> {
        validate_scope(&scope)?;
        self.scope = scope;
        self.touch();
        Ok(())
    }

    /// Update the roster limits
    pub fn set_team_limits(
        &mut self,
        min_teams: u32,
        max_teams: u32,
    ) -> Result<(), ChampionshipValidationError> {
        validate_team_limits(min_teams, max_teams)?;
        self.min_teams = min_teams;
        self.max_teams = max_teams;
        self.touch();
        Ok(())
    }

    /// Rebuild a championship from stored fields (repository use)
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ChampionshipId,
        owner_id: UserId,
        name: String,
        scope: ChampionshipScope,
        min_teams: u32,
        max_teams: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            scope,
            min_teams,
            max_teams,
            created_at,
            updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
