//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_color, validate_country, validate_skill_level, validate_team_id, validate_team_name,
    TeamValidationError,
};
use crate::domain::geo::Continent;
use crate::domain::user::UserId;

/// Team identifier - alphanumeric + hyphens, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Validate and wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Result<Self, TeamValidationError> {
        let id = id.into();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four skill levels of a team, each in [1,10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub resistance: u8,
}

impl SkillSet {
    /// Create a skill set, validating every level
    pub fn new(
        attack: u8,
        midfield: u8,
        defense: u8,
        resistance: u8,
    ) -> Result<Self, TeamValidationError> {
        let skills = Self {
            attack,
            midfield,
            defense,
            resistance,
        };
        skills.validate()?;
        Ok(skills)
    }

    /// Validate all four levels against the [1,10] range
    pub fn validate(&self) -> Result<(), TeamValidationError> {
        validate_skill_level("attack", self.attack)?;
        validate_skill_level("midfield", self.midfield)?;
        validate_skill_level("defense", self.defense)?;
        validate_skill_level("resistance", self.resistance)?;
        Ok(())
    }

    /// Overall rating: rounded mean of the four levels.
    ///
    /// Half-way values round away from zero, so (7,7,8,8) is 8, not 7.
    /// Never persisted; recomputed on every read.
    pub fn overall(&self) -> u8 {
        let sum = self.attack as u16
            + self.midfield as u16
            + self.defense as u16
            + self.resistance as u16;
        (sum as f64 / 4.0).round() as u8
    }
}

/// Football team entity
///
/// Country and continent are plain facts about the team; the enrollment
/// engine compares them against championship scopes but never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// Owning account
    owner_id: UserId,
    /// Display name
    name: String,
    /// Primary shirt color (#RRGGBB, stored uppercase)
    primary_color: String,
    /// Secondary shirt color (#RRGGBB, stored uppercase)
    secondary_color: String,
    /// Home country
    country: String,
    /// Home continent
    continent: Continent,
    /// Skill levels
    skills: SkillSet,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team, validating every field
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TeamId,
        owner_id: UserId,
        name: impl Into<String>,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
        country: impl Into<String>,
        continent: Continent,
        skills: SkillSet,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        let primary_color = primary_color.into();
        let secondary_color = secondary_color.into();
        let country = country.into();

        validate_team_name(&name)?;
        validate_color(&primary_color)?;
        validate_color(&secondary_color)?;
        validate_country(&country)?;
        skills.validate()?;

        let now = Utc::now();

        Ok(Self {
            id,
            owner_id,
            name,
            primary_color: primary_color.to_uppercase(),
            secondary_color: secondary_color.to_uppercase(),
            country,
            continent,
            skills,
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    pub fn secondary_color(&self) -> &str {
        &self.secondary_color
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn continent(&self) -> Continent {
        self.continent
    }

    pub fn skills(&self) -> SkillSet {
        self.skills
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overall rating, derived from the skill levels
    pub fn overall(&self) -> u8 {
        self.skills.overall()
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the shirt colors
    pub fn set_colors(
        &mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Result<(), TeamValidationError> {
        let primary = primary.into();
        let secondary = secondary.into();
        validate_color(&primary)?;
        validate_color(&secondary)?;
        self.primary_color = primary.to_uppercase();
        self.secondary_color = secondary.to_uppercase();
        self.touch();
        Ok(())
    }

    /// Update country and continent together
    pub fn set_location(
        &mut self,
        country: impl Into<String>,
        continent: Continent,
    ) -> Result<(), TeamValidationError> {
        let country = country.into();
        validate_country(&country)?;
        self.country = country;
        self.continent = continent;
        self.touch();
        Ok(())
    }

    /// Update the skill levels
    pub fn set_skills(&mut self, skills: SkillSet) -> Result<(), TeamValidationError> {
        skills.validate()?;
        self.skills = skills;
        self.touch();
        Ok(())
    }

    /// Rebuild a team from stored fields (repository use)
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: TeamId,
        owner_id: UserId,
        name: String,
        primary_color: String,
        secondary_color: String,
        country: String,
        continent: Continent,
        skills: SkillSet,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            primary_color,
            secondary_color,
            country,
            continent,
            skills,
            created_at,
            updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
