//! Championship service for championship management

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::championship::{
    Championship, ChampionshipId, ChampionshipRepository, ChampionshipScope,
};
use crate::domain::enrollment::EnrollmentRepository;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Request for creating a new championship
#[derive(Debug, Clone)]
pub struct CreateChampionshipRequest {
    pub name: String,
    pub scope: ChampionshipScope,
    pub min_teams: u32,
    pub max_teams: u32,
}

/// Request for updating a championship. Updates replace every editable field.
#[derive(Debug, Clone)]
pub struct UpdateChampionshipRequest {
    pub name: String,
    pub scope: ChampionshipScope,
    pub min_teams: u32,
    pub max_teams: u32,
}

/// Championship service for managing a user's championships
///
/// Every operation is scoped to the owning account: foreign championships
/// behave exactly like missing ones.
#[derive(Debug)]
pub struct ChampionshipService<R: ChampionshipRepository, E: EnrollmentRepository> {
    repository: Arc<R>,
    enrollments: Arc<E>,
}

impl<R: ChampionshipRepository, E: EnrollmentRepository> ChampionshipService<R, E> {
    /// Create a new championship service
    pub fn new(repository: Arc<R>, enrollments: Arc<E>) -> Self {
        Self {
            repository,
            enrollments,
        }
    }

    /// Create a new championship owned by the given account
    pub async fn create(
        &self,
        owner_id: &UserId,
        request: CreateChampionshipRequest,
    ) -> Result<Championship, DomainError> {
        info!(owner_id = %owner_id, name = %request.name, "Creating championship");

        let championship_id = ChampionshipId::new(Uuid::new_v4().to_string())
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let championship = Championship::new(
            championship_id,
            owner_id.clone(),
            request.name,
            request.scope,
            request.min_teams,
            request.max_teams,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.create(championship).await
    }

    /// Get one of the account's championships by ID
    pub async fn get(
        &self,
        owner_id: &UserId,
        id: &str,
    ) -> Result<Option<Championship>, DomainError> {
        let championship_id =
            ChampionshipId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get_owned(&championship_id, owner_id).await
    }

    /// List the account's championships, ordered by name then ID
    pub async fn list(&self, owner_id: &UserId) -> Result<Vec<Championship>, DomainError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Count the account's championships
    pub async fn count(&self, owner_id: &UserId) -> Result<usize, DomainError> {
        self.repository.count_by_owner(owner_id).await
    }

    /// Update one of the account's championships
    pub async fn update(
        &self,
        owner_id: &UserId,
        id: &str,
        request: UpdateChampionshipRequest,
    ) -> Result<Championship, DomainError> {
        info!(owner_id = %owner_id, id = %id, "Updating championship");

        let championship_id =
            ChampionshipId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut championship = self
            .repository
            .get_owned(&championship_id, owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Championship '{}' not found", id)))?;

        championship
            .set_name(request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        championship
            .set_scope(request.scope)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        championship
            .set_team_limits(request.min_teams, request.max_teams)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.update(championship).await
    }

    /// Delete one of the account's championships along with its enrollments
    pub async fn delete(&self, owner_id: &UserId, id: &str) -> Result<bool, DomainError> {
        info!(owner_id = %owner_id, id = %id, "Deleting championship");

        let championship_id =
            ChampionshipId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if self
            .repository
            .get_owned(&championship_id, owner_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        // Enrollments go first so a deleted championship never leaves a
        // dangling roster behind
        self.enrollments
            .delete_for_championship(&championship_id)
            .await?;

        self.repository.delete(&championship_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::Enrollment;
    use crate::domain::geo::Continent;
    use crate::domain::team::TeamId;
    use crate::infrastructure::championship::InMemoryChampionshipRepository;
    use crate::infrastructure::enrollment::InMemoryEnrollmentRepository;

    fn create_service(
    ) -> ChampionshipService<InMemoryChampionshipRepository, InMemoryEnrollmentRepository> {
        let repository = Arc::new(InMemoryChampionshipRepository::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
        ChampionshipService::new(repository, enrollments)
    }

    fn owner(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn make_request(name: &str, scope: ChampionshipScope) -> CreateChampionshipRequest {
        CreateChampionshipRequest {
            name: name.to_string(),
            scope,
            min_teams: 2,
            max_teams: 8,
        }
    }

    #[tokio::test]
    async fn test_create_championship() {
        let service = create_service();

        let championship = service
            .create(
                &owner("user-1"),
                make_request("Brasileirao", ChampionshipScope::National {
                    country: "Brazil".to_string(),
                }),
            )
            .await
            .unwrap();

        assert_eq!(championship.name(), "Brasileirao");
        assert_eq!(championship.scope().level(), "national");
        assert_eq!(championship.min_teams(), 2);
        assert_eq!(championship.max_teams(), 8);
    }

    #[tokio::test]
    async fn test_create_championship_invalid_limits() {
        let service = create_service();

        let mut request = make_request("Brasileirao", ChampionshipScope::Global);
        request.min_teams = 10;
        request.max_teams = 4;

        let result = service.create(&owner("user-1"), request).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_scoped_to_owner() {
        let service = create_service();

        let championship = service
            .create(&owner("user-1"), make_request("Copa", ChampionshipScope::Global))
            .await
            .unwrap();

        let found = service
            .get(&owner("user-1"), championship.id().as_str())
            .await
            .unwrap();
        assert!(found.is_some());

        let foreign = service
            .get(&owner("user-2"), championship.id().as_str())
            .await
            .unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn test_list_championships() {
        let service = create_service();

        service
            .create(&owner("user-1"), make_request("Serie B", ChampionshipScope::Global))
            .await
            .unwrap();
        service
            .create(&owner("user-1"), make_request("Serie A", ChampionshipScope::Global))
            .await
            .unwrap();
        service
            .create(&owner("user-2"), make_request("Copa", ChampionshipScope::Global))
            .await
            .unwrap();

        let championships = service.list(&owner("user-1")).await.unwrap();
        assert_eq!(championships.len(), 2);
        assert_eq!(championships[0].name(), "Serie A");
        assert_eq!(championships[1].name(), "Serie B");
    }

    #[tokio::test]
    async fn test_update_championship() {
        let service = create_service();

        let championship = service
            .create(&owner("user-1"), make_request("Copa", ChampionshipScope::Global))
            .await
            .unwrap();

        let updated = service
            .update(
                &owner("user-1"),
                championship.id().as_str(),
                UpdateChampionshipRequest {
                    name: "Copa Continental".to_string(),
                    scope: ChampionshipScope::Continental {
                        continent: Continent::SouthAmerica,
                    },
                    min_teams: 4,
                    max_teams: 16,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name(), "Copa Continental");
        assert_eq!(updated.scope().level(), "continental");
        assert_eq!(updated.max_teams(), 16);
    }

    #[tokio::test]
    async fn test_update_foreign_championship_is_not_found() {
        let service = create_service();

        let championship = service
            .create(&owner("user-1"), make_request("Copa", ChampionshipScope::Global))
            .await
            .unwrap();

        let result = service
            .update(
                &owner("user-2"),
                championship.id().as_str(),
                UpdateChampionshipRequest {
                    name: "Stolen".to_string(),
                    scope: ChampionshipScope::Global,
                    min_teams: 2,
                    max_teams: 8,
                },
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_championship() {
        let service = create_service();

        let championship = service
            .create(&owner("user-1"), make_request("Copa", ChampionshipScope::Global))
            .await
            .unwrap();

        let deleted = service
            .delete(&owner("user-1"), championship.id().as_str())
            .await
            .unwrap();
        assert!(deleted);

        let found = service
            .get(&owner("user-1"), championship.id().as_str())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_foreign_championship_deletes_nothing() {
        let service = create_service();

        let championship = service
            .create(&owner("user-1"), make_request("Copa", ChampionshipScope::Global))
            .await
            .unwrap();

        let deleted = service
            .delete(&owner("user-2"), championship.id().as_str())
            .await
            .unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_championship_cascades_enrollments() {
        let repository = Arc::new(InMemoryChampionshipRepository::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
        let service =
            ChampionshipService::new(Arc::clone(&repository), Arc::clone(&enrollments));

        let championship = service
            .create(&owner("user-1"), make_request("Copa", ChampionshipScope::Global))
            .await
            .unwrap();

        let team_id = TeamId::new("team-1").unwrap();
        enrollments
            .insert(Enrollment::new(championship.id().clone(), team_id.clone()), 8)
            .await
            .unwrap();

        service
            .delete(&owner("user-1"), championship.id().as_str())
            .await
            .unwrap();

        let remaining = enrollments.list_for_team(&team_id).await.unwrap();
        assert!(remaining.is_empty());
    }
}
