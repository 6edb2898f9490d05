//! In-memory enrollment repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::championship::ChampionshipId;
use crate::domain::enrollment::{Enrollment, EnrollmentRepository, RosterInsertError};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// In-memory implementation of EnrollmentRepository
///
/// A single write lock spans the capacity check, the pair check and the
/// insert, which makes `insert` the serializable unit the trait requires.
#[derive(Debug, Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: Arc<RwLock<Vec<Enrollment>>>,
}

impl InMemoryEnrollmentRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn find(
        &self,
        championship_id: &ChampionshipId,
        team_id: &TeamId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;

        Ok(enrollments
            .iter()
            .find(|e| e.championship_id() == championship_id && e.team_id() == team_id)
            .cloned())
    }

    async fn count_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<u64, DomainError> {
        let enrollments = self.enrollments.read().await;

        Ok(enrollments
            .iter()
            .filter(|e| e.championship_id() == championship_id)
            .count() as u64)
    }

    async fn list_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<Vec<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;

        // Records are appended in enroll order, so the vec is already
        // oldest first.
        Ok(enrollments
            .iter()
            .filter(|e| e.championship_id() == championship_id)
            .cloned()
            .collect())
    }

    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;

        Ok(enrollments
            .iter()
            .filter(|e| e.team_id() == team_id)
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        enrollment: Enrollment,
        max_teams: u32,
    ) -> Result<Enrollment, RosterInsertError> {
        let mut enrollments = self.enrollments.write().await;

        let count = enrollments
            .iter()
            .filter(|e| e.championship_id() == enrollment.championship_id())
            .count() as u32;

        if count >= max_teams {
            return Err(RosterInsertError::Full);
        }

        let duplicate = enrollments.iter().any(|e| {
            e.championship_id() == enrollment.championship_id()
                && e.team_id() == enrollment.team_id()
        });

        if duplicate {
            return Err(RosterInsertError::Duplicate);
        }

        enrollments.push(enrollment.clone());

        Ok(enrollment)
    }

    async fn delete(
        &self,
        championship_id: &ChampionshipId,
        team_id: &TeamId,
    ) -> Result<u64, DomainError> {
        let mut enrollments = self.enrollments.write().await;

        let before = enrollments.len();
        enrollments.retain(|e| {
            !(e.championship_id() == championship_id && e.team_id() == team_id)
        });

        Ok((before - enrollments.len()) as u64)
    }

    async fn delete_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<u64, DomainError> {
        let mut enrollments = self.enrollments.write().await;

        let before = enrollments.len();
        enrollments.retain(|e| e.championship_id() != championship_id);

        Ok((before - enrollments.len()) as u64)
    }

    async fn delete_for_team(&self, team_id: &TeamId) -> Result<u64, DomainError> {
        let mut enrollments = self.enrollments.write().await;

        let before = enrollments.len();
        enrollments.retain(|e| e.team_id() != team_id);

        Ok((before - enrollments.len()) as u64)
    }
}
