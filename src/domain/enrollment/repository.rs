//! Enrollment repository trait

use async_trait::async_trait;

use super::entity::Enrollment;
use super::error::RosterInsertError;
use crate::domain::championship::ChampionshipId;
use crate::domain::team::TeamId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for enrollment records.
///
/// `insert` is the concurrency-critical operation: implementations must
/// execute the capacity check, the pair-uniqueness check, and the write as
/// one serializable unit per championship, so concurrent enrolls can neither
/// exceed `max_teams` nor create two records for the same pair.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find the enrollment for a (championship, team) pair
    async fn find(
        &self,
        championship_id: &ChampionshipId,
        team_id: &TeamId,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// Current roster size of a championship
    async fn count_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<u64, DomainError>;

    /// All enrollments of a championship, oldest first
    async fn list_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<Vec<Enrollment>, DomainError>;

    /// All enrollments of a team, oldest first
    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<Enrollment>, DomainError>;

    /// Guarded insert: create the enrollment unless the pair already exists
    /// (`Duplicate`) or the roster already holds `max_teams` records
    /// (`Full`).
    async fn insert(
        &self,
        enrollment: Enrollment,
        max_teams: u32,
    ) -> Result<Enrollment, RosterInsertError>;

    /// Delete the enrollment for a pair, returning how many records matched
    /// (0 or 1). Zero matches is not an error.
    async fn delete(
        &self,
        championship_id: &ChampionshipId,
        team_id: &TeamId,
    ) -> Result<u64, DomainError>;

    /// Cascade: delete every enrollment of a championship
    async fn delete_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<u64, DomainError>;

    /// Cascade: delete every enrollment of a team
    async fn delete_for_team(&self, team_id: &TeamId) -> Result<u64, DomainError>;
}
