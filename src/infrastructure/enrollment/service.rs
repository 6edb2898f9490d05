//! Championship enrollment engine
//!
//! Decides which teams may join which championships and owns the enrollment
//! lifecycle. Preconditions for enrolling run in a fixed order (championship
//! ownership, capacity, team ownership, eligibility, pair uniqueness) so a
//! request that violates several of them always reports the same error.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::domain::championship::{
    is_eligible, Championship, ChampionshipId, ChampionshipRepository,
};
use crate::domain::enrollment::{Enrollment, EnrollmentError, EnrollmentRepository};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Enrollment engine over the championship, team and enrollment stores
#[derive(Debug)]
pub struct EnrollmentService<C: ChampionshipRepository, T: TeamRepository, E: EnrollmentRepository>
{
    championships: Arc<C>,
    teams: Arc<T>,
    enrollments: Arc<E>,
}

impl<C: ChampionshipRepository, T: TeamRepository, E: EnrollmentRepository>
    EnrollmentService<C, T, E>
{
    /// Create a new enrollment service
    pub fn new(championships: Arc<C>, teams: Arc<T>, enrollments: Arc<E>) -> Self {
        Self {
            championships,
            teams,
            enrollments,
        }
    }

    /// Enroll one of the account's teams in one of its championships.
    ///
    /// The final insert re-runs the capacity and pair checks atomically, so
    /// concurrent enrolls can neither oversubscribe the roster nor duplicate
    /// a pair even when the checks here raced.
    pub async fn enroll(
        &self,
        account_id: &UserId,
        championship_id: &str,
        team_id: &str,
    ) -> Result<Enrollment, EnrollmentError> {
        info!(
            account_id = %account_id,
            championship_id = %championship_id,
            team_id = %team_id,
            "Enrolling team"
        );

        let championship = self.owned_championship(account_id, championship_id).await?;

        let enrolled = self
            .enrollments
            .count_for_championship(championship.id())
            .await?;

        if enrolled >= championship.max_teams() as u64 {
            return Err(EnrollmentError::CapacityExceeded);
        }

        let team = self.owned_team(account_id, team_id).await?;

        if !is_eligible(&team, &championship) {
            return Err(EnrollmentError::NotEligible);
        }

        if self
            .enrollments
            .find(championship.id(), team.id())
            .await?
            .is_some()
        {
            return Err(EnrollmentError::AlreadyEnrolled);
        }

        let enrollment = Enrollment::new(championship.id().clone(), team.id().clone());

        Ok(self
            .enrollments
            .insert(enrollment, championship.max_teams())
            .await?)
    }

    /// Remove a team from one of the account's championships.
    ///
    /// Removal is a delete-by-filter: a pair that was never enrolled deletes
    /// zero records and still succeeds, making the operation idempotent.
    pub async fn remove(
        &self,
        account_id: &UserId,
        championship_id: &str,
        team_id: &str,
    ) -> Result<(), EnrollmentError> {
        info!(
            account_id = %account_id,
            championship_id = %championship_id,
            team_id = %team_id,
            "Removing team from championship"
        );

        let championship = self.owned_championship(account_id, championship_id).await?;

        // A team ID that cannot exist matches no enrollment, which is the
        // same successful no-op as removing an absent pair
        let team_id = match TeamId::new(team_id) {
            Ok(id) => id,
            Err(_) => return Ok(()),
        };

        self.enrollments.delete(championship.id(), &team_id).await?;

        Ok(())
    }

    /// Teams of the account that could enroll right now: owned, not already
    /// enrolled, and inside the championship's scope. Ordered by name then
    /// ID like every team listing.
    pub async fn eligible_teams(
        &self,
        account_id: &UserId,
        championship_id: &str,
    ) -> Result<Vec<Team>, EnrollmentError> {
        let championship = self.owned_championship(account_id, championship_id).await?;

        let enrolled: HashSet<String> = self
            .enrollments
            .list_for_championship(championship.id())
            .await?
            .into_iter()
            .map(|e| e.team_id().as_str().to_string())
            .collect();

        let teams = self.teams.list_by_owner(account_id).await?;

        Ok(teams
            .into_iter()
            .filter(|t| !enrolled.contains(t.id().as_str()))
            .filter(|t| is_eligible(t, &championship))
            .collect())
    }

    /// The enrolled teams of one of the account's championships, oldest
    /// enrollment first
    pub async fn roster(
        &self,
        account_id: &UserId,
        championship_id: &str,
    ) -> Result<Vec<(Enrollment, Team)>, EnrollmentError> {
        let championship = self.owned_championship(account_id, championship_id).await?;

        let enrollments = self
            .enrollments
            .list_for_championship(championship.id())
            .await?;

        let mut roster = Vec::with_capacity(enrollments.len());

        for enrollment in enrollments {
            if let Some(team) = self.teams.get(enrollment.team_id()).await? {
                roster.push((enrollment, team));
            }
        }

        Ok(roster)
    }

    /// Current roster size of a championship
    pub async fn roster_size(&self, championship_id: &ChampionshipId) -> Result<u64, DomainError> {
        self.enrollments
            .count_for_championship(championship_id)
            .await
    }

    /// The championships a team is enrolled in, oldest enrollment first
    pub async fn championships_for_team(
        &self,
        team_id: &TeamId,
    ) -> Result<Vec<(Enrollment, Championship)>, DomainError> {
        let enrollments = self.enrollments.list_for_team(team_id).await?;

        let mut result = Vec::with_capacity(enrollments.len());

        for enrollment in enrollments {
            if let Some(championship) = self
                .championships
                .get(enrollment.championship_id())
                .await?
            {
                result.push((enrollment, championship));
            }
        }

        Ok(result)
    }

    /// Absent and foreign championships are indistinguishable by design
    async fn owned_championship(
        &self,
        account_id: &UserId,
        id: &str,
    ) -> Result<Championship, EnrollmentError> {
        let championship_id = match ChampionshipId::new(id) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(EnrollmentError::not_found(format!(
                    "Championship '{}' not found",
                    id
                )))
            }
        };

        self.championships
            .get_owned(&championship_id, account_id)
            .await?
            .ok_or_else(|| EnrollmentError::not_found(format!("Championship '{}' not found", id)))
    }

    async fn owned_team(&self, account_id: &UserId, id: &str) -> Result<Team, EnrollmentError> {
        let team_id = match TeamId::new(id) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(EnrollmentError::not_found(format!(
                    "Team '{}' not found",
                    id
                )))
            }
        };

        self.teams
            .get_owned(&team_id, account_id)
            .await?
            .ok_or_else(|| EnrollmentError::not_found(format!("Team '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Barrier;

    use crate::domain::championship::ChampionshipScope;
    use crate::domain::enrollment::MockEnrollmentRepository;
    use crate::domain::geo::Continent;
    use crate::domain::team::SkillSet;
    use crate::infrastructure::championship::InMemoryChampionshipRepository;
    use crate::infrastructure::enrollment::InMemoryEnrollmentRepository;
    use crate::infrastructure::team::InMemoryTeamRepository;

    type InMemoryEngine = EnrollmentService<
        InMemoryChampionshipRepository,
        InMemoryTeamRepository,
        InMemoryEnrollmentRepository,
    >;

    fn owner(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn make_engine() -> (
        Arc<InMemoryChampionshipRepository>,
        Arc<InMemoryTeamRepository>,
        Arc<InMemoryEnrollmentRepository>,
        InMemoryEngine,
    ) {
        let championships = Arc::new(InMemoryChampionshipRepository::new());
        let teams = Arc::new(InMemoryTeamRepository::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepository::new());

        let service = EnrollmentService::new(
            Arc::clone(&championships),
            Arc::clone(&teams),
            Arc::clone(&enrollments),
        );

        (championships, teams, enrollments, service)
    }

    async fn seed_championship(
        repo: &InMemoryChampionshipRepository,
        id: &str,
        owner_id: &str,
        scope: ChampionshipScope,
        max_teams: u32,
    ) -> Championship {
        let championship = Championship::new(
            ChampionshipId::new(id).unwrap(),
            owner(owner_id),
            "Test Championship",
            scope,
            2,
            max_teams,
        )
        .unwrap();

        repo.create(championship).await.unwrap()
    }

    async fn seed_team(
        repo: &InMemoryTeamRepository,
        id: &str,
        owner_id: &str,
        name: &str,
        country: &str,
        continent: Continent,
    ) -> Team {
        let team = Team::new(
            TeamId::new(id).unwrap(),
            owner(owner_id),
            name,
            "#FF0000",
            "#FFFFFF",
            country,
            continent,
            SkillSet::new(5, 5, 5, 5).unwrap(),
        )
        .unwrap();

        repo.create(team).await.unwrap()
    }

    #[tokio::test]
    async fn test_enroll_success() {
        let (championships, teams, enrollments, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        let enrollment = service
            .enroll(&owner("user-1"), "champ-1", "team-1")
            .await
            .unwrap();

        assert_eq!(enrollment.championship_id().as_str(), "champ-1");
        assert_eq!(enrollment.team_id().as_str(), "team-1");

        let count = enrollments
            .count_for_championship(&ChampionshipId::new("champ-1").unwrap())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_enroll_unknown_championship() {
        let (_, teams, _, service) = make_engine();

        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_enroll_foreign_championship_is_not_found() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-2", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_enroll_unknown_team() {
        let (championships, _, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;

        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_enroll_foreign_team_is_not_found() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-2", "Santos", "Brazil", Continent::SouthAmerica).await;

        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_enroll_full_roster() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 2).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Vasco", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-3", "user-1", "Bahia", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.enroll(&owner("user-1"), "champ-1", "team-2").await.unwrap();

        let result = service.enroll(&owner("user-1"), "champ-1", "team-3").await;
        assert!(matches!(result, Err(EnrollmentError::CapacityExceeded)));
    }

    #[tokio::test]
    async fn test_enroll_national_scope() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(
            &championships,
            "champ-1",
            "user-1",
            ChampionshipScope::National {
                country: "Brazil".to_string(),
            },
            8,
        )
        .await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Boca", "Argentina", Continent::SouthAmerica).await;

        let ok = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(ok.is_ok());

        let rejected = service.enroll(&owner("user-1"), "champ-1", "team-2").await;
        assert!(matches!(rejected, Err(EnrollmentError::NotEligible)));
    }

    #[tokio::test]
    async fn test_enroll_country_match_is_case_sensitive() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(
            &championships,
            "champ-1",
            "user-1",
            ChampionshipScope::National {
                country: "Brazil".to_string(),
            },
            8,
        )
        .await;
        seed_team(&teams, "team-1", "user-1", "Santos", "brazil", Continent::SouthAmerica).await;

        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotEligible)));
    }

    #[tokio::test]
    async fn test_enroll_continental_scope() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(
            &championships,
            "champ-1",
            "user-1",
            ChampionshipScope::Continental {
                continent: Continent::SouthAmerica,
            },
            8,
        )
        .await;
        seed_team(&teams, "team-1", "user-1", "Boca", "Argentina", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Porto", "Portugal", Continent::Europe).await;

        let ok = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(ok.is_ok());

        let rejected = service.enroll(&owner("user-1"), "champ-1", "team-2").await;
        assert!(matches!(rejected, Err(EnrollmentError::NotEligible)));
    }

    #[tokio::test]
    async fn test_enroll_global_scope_admits_any_team() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Porto", "Portugal", Continent::Europe).await;

        assert!(service.enroll(&owner("user-1"), "champ-1", "team-1").await.is_ok());
        assert!(service.enroll(&owner("user-1"), "champ-1", "team-2").await.is_ok());
    }

    #[tokio::test]
    async fn test_enroll_duplicate_pair() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();

        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::AlreadyEnrolled)));
    }

    #[tokio::test]
    async fn test_full_roster_reported_before_already_enrolled() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 2).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Vasco", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.enroll(&owner("user-1"), "champ-1", "team-2").await.unwrap();

        // Capacity is checked before pair uniqueness
        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::CapacityExceeded)));
    }

    #[tokio::test]
    async fn test_concurrent_enrolls_respect_capacity() {
        let (championships, teams, enrollments, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 3).await;

        for i in 0..8 {
            seed_team(
                &teams,
                &format!("team-{}", i),
                "user-1",
                &format!("Team {}", i),
                "Brazil",
                Continent::SouthAmerica,
            )
            .await;
        }

        let service = Arc::new(service);
        let barrier = Arc::new(Barrier::new(8));
        let mut handles = Vec::new();

        for i in 0..8 {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);

            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                service
                    .enroll(&owner("user-1"), "champ-1", &format!("team-{}", i))
                    .await
            }));
        }

        let mut successes = 0;
        let mut capacity = 0;

        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(EnrollmentError::CapacityExceeded) => capacity += 1,
                Err(e) => panic!("unexpected error: {:?}", e),
            }
        }

        assert_eq!(successes, 3);
        assert_eq!(capacity, 5);

        let count = enrollments
            .count_for_championship(&ChampionshipId::new("champ-1").unwrap())
            .await
            .unwrap();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_concurrent_enrolls_of_same_pair() {
        let (championships, teams, enrollments, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        let service = Arc::new(service);
        let barrier = Arc::new(Barrier::new(8));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);

            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                service.enroll(&owner("user-1"), "champ-1", "team-1").await
            }));
        }

        let mut successes = 0;
        let mut duplicates = 0;

        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(EnrollmentError::AlreadyEnrolled) => duplicates += 1,
                Err(e) => panic!("unexpected error: {:?}", e),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 7);

        let count = enrollments
            .count_for_championship(&ChampionshipId::new("champ-1").unwrap())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_remove_enrollment() {
        let (championships, teams, enrollments, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.remove(&owner("user-1"), "champ-1", "team-1").await.unwrap();

        let count = enrollments
            .count_for_championship(&ChampionshipId::new("champ-1").unwrap())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_remove_frees_capacity() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 2).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Vasco", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-3", "user-1", "Bahia", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.enroll(&owner("user-1"), "champ-1", "team-2").await.unwrap();
        service.remove(&owner("user-1"), "champ-1", "team-1").await.unwrap();

        let result = service.enroll(&owner("user-1"), "champ-1", "team-3").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        // Never enrolled: removal still succeeds
        service.remove(&owner("user-1"), "champ-1", "team-1").await.unwrap();

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.remove(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.remove(&owner("user-1"), "champ-1", "team-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_unknown_championship() {
        let (_, _, _, service) = make_engine();

        let result = service.remove(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_foreign_championship_is_not_found() {
        let (championships, _, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-2", ChampionshipScope::Global, 8).await;

        let result = service.remove(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_malformed_team_id_is_a_noop() {
        let (championships, _, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;

        let result = service.remove(&owner("user-1"), "champ-1", "not a valid id!").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_eligible_teams() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(
            &championships,
            "champ-1",
            "user-1",
            ChampionshipScope::National {
                country: "Brazil".to_string(),
            },
            8,
        )
        .await;

        // Eligible and free
        seed_team(&teams, "team-1", "user-1", "Vasco", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Bahia", "Brazil", Continent::SouthAmerica).await;
        // Wrong country
        seed_team(&teams, "team-3", "user-1", "Boca", "Argentina", Continent::SouthAmerica).await;
        // Someone else's team
        seed_team(&teams, "team-4", "user-2", "Gremio", "Brazil", Continent::SouthAmerica).await;
        // Eligible but already enrolled
        seed_team(&teams, "team-5", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;
        service.enroll(&owner("user-1"), "champ-1", "team-5").await.unwrap();

        let eligible = service
            .eligible_teams(&owner("user-1"), "champ-1")
            .await
            .unwrap();

        let names: Vec<&str> = eligible.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Bahia", "Vasco"]);
    }

    #[tokio::test]
    async fn test_eligible_teams_unknown_championship() {
        let (_, _, _, service) = make_engine();

        let result = service.eligible_teams(&owner("user-1"), "champ-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_eligible_teams_empty_when_all_enrolled() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();

        let eligible = service
            .eligible_teams(&owner("user-1"), "champ-1")
            .await
            .unwrap();
        assert!(eligible.is_empty());
    }

    #[tokio::test]
    async fn test_roster_oldest_first() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Vasco", "Brazil", Continent::SouthAmerica).await;
        seed_team(&teams, "team-2", "user-1", "Bahia", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.enroll(&owner("user-1"), "champ-1", "team-2").await.unwrap();

        let roster = service.roster(&owner("user-1"), "champ-1").await.unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].1.name(), "Vasco");
        assert_eq!(roster[1].1.name(), "Bahia");
    }

    #[tokio::test]
    async fn test_roster_foreign_championship_is_not_found() {
        let (championships, _, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-2", ChampionshipScope::Global, 8).await;

        let result = service.roster(&owner("user-1"), "champ-1").await;
        assert!(matches!(result, Err(EnrollmentError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_championships_for_team() {
        let (championships, teams, _, service) = make_engine();

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;
        seed_championship(&championships, "champ-2", "user-1", ChampionshipScope::Global, 8).await;
        seed_team(&teams, "team-1", "user-1", "Santos", "Brazil", Continent::SouthAmerica).await;

        service.enroll(&owner("user-1"), "champ-1", "team-1").await.unwrap();
        service.enroll(&owner("user-1"), "champ-2", "team-1").await.unwrap();

        let enrolled_in = service
            .championships_for_team(&TeamId::new("team-1").unwrap())
            .await
            .unwrap();

        assert_eq!(enrolled_in.len(), 2);
        assert_eq!(enrolled_in[0].1.id().as_str(), "champ-1");
        assert_eq!(enrolled_in[1].1.id().as_str(), "champ-2");
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_unavailable() {
        let championships = Arc::new(InMemoryChampionshipRepository::new());
        let teams = Arc::new(InMemoryTeamRepository::new());

        seed_championship(&championships, "champ-1", "user-1", ChampionshipScope::Global, 8).await;

        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_count_for_championship()
            .returning(|_| Err(DomainError::storage("connection refused")));

        let service = EnrollmentService::new(championships, teams, Arc::new(enrollments));

        let result = service.enroll(&owner("user-1"), "champ-1", "team-1").await;
        assert!(matches!(result, Err(EnrollmentError::Unavailable { .. })));
    }
}
