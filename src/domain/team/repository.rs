//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Get a team by ID only if it is owned by the given account
    async fn get_owned(&self, id: &TeamId, owner_id: &UserId) -> Result<Option<Team>, DomainError>;

    /// List all teams owned by an account, ordered by name then id
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Team>, DomainError>;

    /// Count teams owned by an account
    async fn count_by_owner(&self, owner_id: &UserId) -> Result<usize, DomainError>;

    /// Create a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Update an existing team
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// Delete a team by ID
    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockTeamRepository {
        teams: RwLock<HashMap<String, Team>>,
        fail: RwLock<bool>,
    }

    impl MockTeamRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent operation fail with a storage error
        pub fn set_fail(&self, fail: bool) {
            *self.fail.write().unwrap() = fail;
        }

        fn check_fail(&self) -> Result<(), DomainError> {
            if *self.fail.read().unwrap() {
                return Err(DomainError::storage("mock repository failure"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
            self.check_fail()?;
            let teams = self.teams.read().unwrap();
            Ok(teams.get(id.as_str()).cloned())
        }

        async fn get_owned(
            &self,
            id: &TeamId,
            owner_id: &UserId,
        ) -> Result<Option<Team>, DomainError> {
            self.check_fail()?;
            let teams = self.teams.read().unwrap();
            Ok(teams
                .get(id.as_str())
                .filter(|t| t.owner_id() == owner_id)
                .cloned())
        }

        async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Team>, DomainError> {
            self.check_fail()?;
            let teams = self.teams.read().unwrap();
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
            self.check_fail()?;
            let teams = self.teams.read().unwrap();
            Ok(teams.values().filter(|t| t.owner_id() == owner_id).count())
        }

        async fn create(&self, team: Team) -> Result<Team, DomainError> {
            self.check_fail()?;
            let mut teams = self.teams.write().unwrap();

            if teams.contains_key(team.id().as_str()) {
                return Err(DomainError::conflict(format!(
                    "Team '{}' already exists",
                    team.id()
                )));
            }

            teams.insert(team.id().as_str().to_string(), team.clone());
            Ok(team)
        }

        async fn update(&self, team: Team) -> Result<Team, DomainError> {
            self.check_fail()?;
            let mut teams = self.teams.write().unwrap();

            if !teams.contains_key(team.id().as_str()) {
                return Err(DomainError::not_found(format!(
                    "Team '{}' not found",
                    team.id()
                )));
            }

            teams.insert(team.id().as_str().to_string(), team.clone());
            Ok(team)
        }

        async fn delete(&self, id: &TeamId) -> Result<bool, DomainError> {
            self.check_fail()?;
            let mut teams = self.teams.write().unwrap();
            Ok(teams.remove(id.as_str()).is_some())
        }
    }
}
