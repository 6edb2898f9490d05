//! Championship repository trait

use async_trait::async_trait;

use super::entity::{Championship, ChampionshipId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository for managing championships
#[async_trait]
pub trait ChampionshipRepository: Send + Sync + std::fmt::Debug {
    /// Get a championship by ID
    async fn get(&self, id: &ChampionshipId) -> Result<Option<Championship>, DomainError>;

    /// Get a championship by ID only if it is owned by the given account
    async fn get_owned(
        &self,
        id: &ChampionshipId,
        owner_id: &UserId,
    ) -> Result<Option<Championship>, DomainError>;

    /// List all championships owned by an account, ordered by name then id
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Championship>, DomainError>;

    /// Count championships owned by an account
    async fn count_by_owner(&self, owner_id: &UserId) -> Result<usize, DomainError>;

    /// Create a new championship
    async fn create(&self, championship: Championship) -> Result<Championship, DomainError>;

    /// Update an existing championship
    async fn update(&self, championship: Championship) -> Result<Championship, DomainError>;

    /// Delete a championship by ID
    async fn delete(&self, id: &ChampionshipId) -> Result<bool, DomainError>;
}
