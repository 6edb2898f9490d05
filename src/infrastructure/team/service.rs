//! Team service for team management

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::enrollment::EnrollmentRepository;
use crate::domain::geo::Continent;
use crate::domain::team::{SkillSet, Team, TeamId, TeamRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Request for creating a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub country: String,
    pub continent: Continent,
    pub skills: SkillSet,
}

/// Request for updating a team. Updates replace every editable field.
#[derive(Debug, Clone)]
pub struct UpdateTeamRequest {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub country: String,
    pub continent: Continent,
    pub skills: SkillSet,
}

/// Team service for managing a user's teams
///
/// Every operation is scoped to the owning account: foreign teams behave
/// exactly like missing ones.
#[derive(Debug)]
pub struct TeamService<R: TeamRepository, E: EnrollmentRepository> {
    repository: Arc<R>,
    enrollments: Arc<E>,
}

impl<R: TeamRepository, E: EnrollmentRepository> TeamService<R, E> {
    /// Create a new team service
    pub fn new(repository: Arc<R>, enrollments: Arc<E>) -> Self {
        Self {
            repository,
            enrollments,
        }
    }

    /// Create a new team owned by the given account
    pub async fn create(
        &self,
        owner_id: &UserId,
        request: CreateTeamRequest,
    ) -> Result<Team, DomainError> {
        info!(owner_id = %owner_id, name = %request.name, "Creating team");

        let team_id = TeamId::new(Uuid::new_v4().to_string())
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let team = Team::new(
            team_id,
            owner_id.clone(),
            request.name,
            request.primary_color,
            request.secondary_color,
            request.country,
            request.continent,
            request.skills,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.create(team).await
    }

    /// Get one of the account's teams by ID
    pub async fn get(&self, owner_id: &UserId, id: &str) -> Result<Option<Team>, DomainError> {
        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get_owned(&team_id, owner_id).await
    }

    /// List the account's teams, ordered by name then ID
    pub async fn list(&self, owner_id: &UserId) -> Result<Vec<Team>, DomainError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Count the account's teams
    pub async fn count(&self, owner_id: &UserId) -> Result<usize, DomainError> {
        self.repository.count_by_owner(owner_id).await
    }

    /// Update one of the account's teams
    pub async fn update(
        &self,
        owner_id: &UserId,
        id: &str,
        request: UpdateTeamRequest,
    ) -> Result<Team, DomainError> {
        info!(owner_id = %owner_id, id = %id, "Updating team");

        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut team = self
            .repository
            .get_owned(&team_id, owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;

        team.set_name(request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        team.set_colors(request.primary_color, request.secondary_color)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        team.set_location(request.country, request.continent)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        team.set_skills(request.skills)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.update(team).await
    }

    /// Delete one of the account's teams along with its enrollments
    pub async fn delete(&self, owner_id: &UserId, id: &str) -> Result<bool, DomainError> {
        info!(owner_id = %owner_id, id = %id, "Deleting team");

        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if self
            .repository
            .get_owned(&team_id, owner_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        // Enrollments go first so a roster never points at a missing team
        self.enrollments.delete_for_team(&team_id).await?;

        self.repository.delete(&team_id).await
    }
}
