//! In-memory team repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<String, Team>>>,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(id.as_str()).cloned())
    }

    async fn get_owned(&self, id: &TeamId, owner_id: &UserId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams
            .get(id.as_str())
            .filter(|t| t.owner_id() == owner_id)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().await;

        let mut result: Vec<Team> = teams
            .values()
            .filter(|t| t.owner_id() == owner_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });

        Ok(result)
    }

    async fn count_by_owner(&self, owner_id: &UserId) -> Result<usize, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.values().filter(|t| t.owner_id() == owner_id).count())
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        let id = team.id().as_str().to_string();

        if teams.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Team with ID '{}' already exists",
                id
            )));
        }

        teams.insert(id, team.clone());

        Ok(team)
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        let id = team.id().as_str().to_string();

        if !teams.contains_key(&id) {
            return Err(DomainError::not_found(format!("Team '{}' not found", id)));
        }

        teams.insert(id, team.clone());

        Ok(team)
    }

    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError> {
        let mut teams = self.teams.write().await;
        Ok(teams.remove(id.as_str()).is_some())
    }
}
