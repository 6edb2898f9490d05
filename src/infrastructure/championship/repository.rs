//! In-memory championship repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::championship::{Championship, ChampionshipId, ChampionshipRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of ChampionshipRepository
#[derive(Debug, Default)]
pub struct InMemoryChampionshipRepository {
    championships: Arc<RwLock<HashMap<String, Championship>>>,
}

impl InMemoryChampionshipRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChampionshipRepository for InMemoryChampionshipRepository {
    async fn get(&self, id: &ChampionshipId) -> Result<Option<Championship>, DomainError> {
        let championships = self.championships.read().await;
        Ok(championships.get(id.as_str()).cloned())
    }

    async fn get_owned(
        &self,
        id: &ChampionshipId,
        owner_id: &UserId,
    ) -> Result<Option<Championship>, DomainError> {
        let championships = self.championships.read().await;
        Ok(championships
            .get(id.as_str())
            .filter(|c| c.owner_id() == owner_id)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Championship>, DomainError> {
        let championships = self.championships.read().await;

        let mut result: Vec<Championship> = championships
            .values()
            .filter(|c| c.owner_id() == owner_id)
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
        let championships = self.championships.read().await;
        Ok(championships
            .values()
            .filter(|c| c.owner_id() == owner_id)
            .count())
    }

    async fn create(&self, championship: Championship) -> Result<Championship, DomainError> {
        let mut championships = self.championships.write().await;

        let id = championship.id().as_str().to_string();

        if championships.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Championship with ID '{}' already exists",
                id
            )));
        }

        championships.insert(id, championship.clone());

        Ok(championship)
    }

    async fn update(&self, championship: Championship) -> Result<Championship, DomainError> {
        let mut championships = self.championships.write().await;

        let id = championship.id().as_str().to_string();

        if !championships.contains_key(&id) {
            return Err(DomainError::not_found(format!(
                "Championship '{}' not found",
                id
            )));
        }

        championships.insert(id, championship.clone());

        Ok(championship)
    }

    async fn delete(&self, id: &ChampionshipId) -> Result<bool, DomainError> {
        let mut championships = self.championships.write().await;
        Ok(championships.remove(id.as_str()).is_some())
    }
}
