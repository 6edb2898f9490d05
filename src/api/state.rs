//! Application state for shared services

use std::sync::Arc;

use crate::domain::championship::{Championship, ChampionshipId, ChampionshipRepository};
use crate::domain::enrollment::{Enrollment, EnrollmentError, EnrollmentRepository};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::championship::{
    ChampionshipService, CreateChampionshipRequest, UpdateChampionshipRequest,
};
use crate::infrastructure::enrollment::EnrollmentService;
use crate::infrastructure::team::{CreateTeamRequest, TeamService, UpdateTeamRequest};
use crate::infrastructure::user::{PasswordHasher, RegisterUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub championship_service: Arc<dyn ChampionshipServiceTrait>,
    pub enrollment_service: Arc<dyn EnrollmentServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

/// Trait for user account operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<Option<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
}

/// Trait for team service operations, all scoped to the owning account
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn get(&self, owner_id: &UserId, id: &str) -> Result<Option<Team>, DomainError>;
    async fn list(&self, owner_id: &UserId) -> Result<Vec<Team>, DomainError>;
    async fn count(&self, owner_id: &UserId) -> Result<usize, DomainError>;
    async fn create(
        &self,
        owner_id: &UserId,
        request: CreateTeamRequest,
    ) -> Result<Team, DomainError>;
    async fn update(
        &self,
        owner_id: &UserId,
        id: &str,
        request: UpdateTeamRequest,
    ) -> Result<Team, DomainError>;
    async fn delete(&self, owner_id: &UserId, id: &str) -> Result<bool, DomainError>;
}

/// Trait for championship service operations, all scoped to the owning account
#[async_trait::async_trait]
pub trait ChampionshipServiceTrait: Send + Sync {
    async fn get(&self, owner_id: &UserId, id: &str)
        -> Result<Option<Championship>, DomainError>;
    async fn list(&self, owner_id: &UserId) -> Result<Vec<Championship>, DomainError>;
    async fn count(&self, owner_id: &UserId) -> Result<usize, DomainError>;
    async fn create(
        &self,
        owner_id: &UserId,
        request: CreateChampionshipRequest,
    ) -> Result<Championship, DomainError>;
    async fn update(
        &self,
        owner_id: &UserId,
        id: &str,
        request: UpdateChampionshipRequest,
    ) -> Result<Championship, DomainError>;
    async fn delete(&self, owner_id: &UserId, id: &str) -> Result<bool, DomainError>;
}

/// Trait for the enrollment engine
#[async_trait::async_trait]
pub trait EnrollmentServiceTrait: Send + Sync {
    /// Enroll a team in a championship after the eligibility, capacity and
    /// uniqueness checks pass
    async fn enroll(
        &self,
        account_id: &UserId,
        championship_id: &str,
        team_id: &str,
    ) -> Result<Enrollment, EnrollmentError>;
    /// Remove a team from a championship roster (idempotent)
    async fn remove(
        &self,
        account_id: &UserId,
        championship_id: &str,
        team_id: &str,
    ) -> Result<(), EnrollmentError>;
    /// Teams of the account that could enroll right now
    async fn eligible_teams(
        &self,
        account_id: &UserId,
        championship_id: &str,
    ) -> Result<Vec<Team>, EnrollmentError>;
    /// Enrolled teams of a championship, oldest enrollment first
    async fn roster(
        &self,
        account_id: &UserId,
        championship_id: &str,
    ) -> Result<Vec<(Enrollment, Team)>, EnrollmentError>;
    /// Current roster size of a championship
    async fn roster_size(&self, championship_id: &ChampionshipId) -> Result<u64, DomainError>;
    /// Championships a team is enrolled in, oldest enrollment first
    async fn championships_for_team(
        &self,
        team_id: &TeamId,
    ) -> Result<Vec<(Enrollment, Championship)>, DomainError>;
}

// Implement the traits for the actual services

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, email, password).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }
}

#[async_trait::async_trait]
impl<R, E> TeamServiceTrait for TeamService<R, E>
where
    R: TeamRepository + 'static,
    E: EnrollmentRepository + 'static,
{
    async fn get(&self, owner_id: &UserId, id: &str) -> Result<Option<Team>, DomainError> {
        TeamService::get(self, owner_id, id).await
    }

    async fn list(&self, owner_id: &UserId) -> Result<Vec<Team>, DomainError> {
        TeamService::list(self, owner_id).await
    }

    async fn count(&self, owner_id: &UserId) -> Result<usize, DomainError> {
        TeamService::count(self, owner_id).await
    }

    async fn create(
        &self,
        owner_id: &UserId,
        request: CreateTeamRequest,
    ) -> Result<Team, DomainError> {
        TeamService::create(self, owner_id, request).await
    }

    async fn update(
        &self,
        owner_id: &UserId,
        id: &str,
        request: UpdateTeamRequest,
    ) -> Result<Team, DomainError> {
        TeamService::update(self, owner_id, id, request).await
    }

    async fn delete(&self, owner_id: &UserId, id: &str) -> Result<bool, DomainError> {
        TeamService::delete(self, owner_id, id).await
    }
}

#[async_trait::async_trait]
impl<R, E> ChampionshipServiceTrait for ChampionshipService<R, E>
where
    R: ChampionshipRepository + 'static,
    E: EnrollmentRepository + 'static,
{
    async fn get(
        &self,
        owner_id: &UserId,
        id: &str,
    ) -> Result<Option<Championship>, DomainError> {
        ChampionshipService::get(self, owner_id, id).await
    }

    async fn list(&self, owner_id: &UserId) -> Result<Vec<Championship>, DomainError> {
        ChampionshipService::list(self, owner_id).await
    }

    async fn count(&self, owner_id: &UserId) -> Result<usize, DomainError> {
        ChampionshipService::count(self, owner_id).await
    }

    async fn create(
        &self,
        owner_id: &UserId,
        request: CreateChampionshipRequest,
    ) -> Result<Championship, DomainError> {
        ChampionshipService::create(self, owner_id, request).await
    }

    async fn update(
        &self,
        owner_id: &UserId,
        id: &str,
        request: UpdateChampionshipRequest,
    ) -> Result<Championship, DomainError> {
        ChampionshipService::update(self, owner_id, id, request).await
    }

    async fn delete(&self, owner_id: &UserId, id: &str) -> Result<bool, DomainError> {
        ChampionshipService::delete(self, owner_id, id).await
    }
}

#[async_trait::async_trait]
impl<C, T, E> EnrollmentServiceTrait for EnrollmentService<C, T, E>
where
    C: ChampionshipRepository + 'static,
    T: TeamRepository + 'static,
    E: EnrollmentRepository + 'static,
{
    async fn enroll(
        &self,
        account_id: &UserId,
        championship_id: &str,
        team_id: &str,
    ) -> Result<Enrollment, EnrollmentError> {
        EnrollmentService::enroll(self, account_id, championship_id, team_id).await
    }

    async fn remove(
        &self,
        account_id: &UserId,
        championship_id: &str,
        team_id: &str,
    ) -> Result<(), EnrollmentError> {
        EnrollmentService::remove(self, account_id, championship_id, team_id).await
    }

    async fn eligible_teams(
        &self,
        account_id: &UserId,
        championship_id: &str,
    ) -> Result<Vec<Team>, EnrollmentError> {
        EnrollmentService::eligible_teams(self, account_id, championship_id).await
    }

    async fn roster(
        &self,
        account_id: &UserId,
        championship_id: &str,
    ) -> Result<Vec<(Enrollment, Team)>, EnrollmentError> {
        EnrollmentService::roster(self, account_id, championship_id).await
    }

    async fn roster_size(&self, championship_id: &ChampionshipId) -> Result<u64, DomainError> {
        EnrollmentService::roster_size(self, championship_id).await
    }

    async fn championships_for_team(
        &self,
        team_id: &TeamId,
    ) -> Result<Vec<(Enrollment, Championship)>, DomainError> {
        EnrollmentService::championships_for_team(self, team_id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        team_service: Arc<dyn TeamServiceTrait>,
        championship_service: Arc<dyn ChampionshipServiceTrait>,
        enrollment_service: Arc<dyn EnrollmentServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            user_service,
            team_service,
            championship_service,
            enrollment_service,
            jwt_service,
        }
    }
}
