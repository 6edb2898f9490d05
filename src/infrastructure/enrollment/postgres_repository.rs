//! PostgreSQL enrollment repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::championship::ChampionshipId;
use crate::domain::enrollment::{Enrollment, EnrollmentRepository, RosterInsertError};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// PostgreSQL implementation of EnrollmentRepository.
///
/// `insert` runs in a transaction that locks the championship row with
/// `SELECT ... FOR UPDATE`, so the capacity count and the write execute as
/// one serializable unit per championship. The primary key over
/// (championship_id, team_id) enforces pair uniqueness.
#[derive(Debug, Clone)]
pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn find(
        &self,
        championship_id: &ChampionshipId,
        team_id: &TeamId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row = sqlx::query(
            "SELECT championship_id, team_id, enrolled_at FROM enrollments \
             WHERE championship_id = $1 AND team_id = $2",
        )
        .bind(championship_id.as_str())
        .bind(team_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to find enrollment: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_enrollment(&row)?)),
            None => Ok(None),
        }
    }

    async fn count_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<u64, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE championship_id = $1")
                .bind(championship_id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to count enrollments: {}", e)))?;

        Ok(count as u64)
    }

    async fn list_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<Vec<Enrollment>, DomainError> {
        let rows = sqlx::query(
            "SELECT championship_id, team_id, enrolled_at FROM enrollments \
             WHERE championship_id = $1 ORDER BY enrolled_at, team_id",
        )
        .bind(championship_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list enrollments: {}", e)))?;

        let mut enrollments = Vec::with_capacity(rows.len());

        for row in rows {
            enrollments.push(row_to_enrollment(&row)?);
        }

        Ok(enrollments)
    }

    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<Enrollment>, DomainError> {
        let rows = sqlx::query(
            "SELECT championship_id, team_id, enrolled_at FROM enrollments \
             WHERE team_id = $1 ORDER BY enrolled_at, championship_id",
        )
        .bind(team_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list enrollments: {}", e)))?;

        let mut enrollments = Vec::with_capacity(rows.len());

        for row in rows {
            enrollments.push(row_to_enrollment(&row)?);
        }

        Ok(enrollments)
    }

    async fn insert(
        &self,
        enrollment: Enrollment,
        max_teams: u32,
    ) -> Result<Enrollment, RosterInsertError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        // Lock the championship row so concurrent inserts for the same
        // championship queue behind this transaction.
        let locked = sqlx::query("SELECT id FROM championships WHERE id = $1 FOR UPDATE")
            .bind(enrollment.championship_id().as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to lock championship: {}", e)))?;

        if locked.is_none() {
            return Err(RosterInsertError::Store(DomainError::storage(format!(
                "Championship '{}' disappeared during enrollment",
                enrollment.championship_id().as_str()
            ))));
        }

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE championship_id = $1")
                .bind(enrollment.championship_id().as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to count enrollments: {}", e)))?;

        // Capacity is checked before uniqueness, matching the reporting
        // order of the enroll operation.
        if count >= max_teams as i64 {
            return Err(RosterInsertError::Full);
        }

        sqlx::query(
            "INSERT INTO enrollments (championship_id, team_id, enrolled_at) VALUES ($1, $2, $3)",
        )
        .bind(enrollment.championship_id().as_str())
        .bind(enrollment.team_id().as_str())
        .bind(enrollment.enrolled_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                RosterInsertError::Duplicate
            } else {
                RosterInsertError::Store(DomainError::storage(format!(
                    "Failed to insert enrollment: {}",
                    e
                )))
            }
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit enrollment: {}", e)))?;

        Ok(enrollment)
    }

    async fn delete(
        &self,
        championship_id: &ChampionshipId,
        team_id: &TeamId,
    ) -> Result<u64, DomainError> {
        let result =
            sqlx::query("DELETE FROM enrollments WHERE championship_id = $1 AND team_id = $2")
                .bind(championship_id.as_str())
                .bind(team_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to delete enrollment: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete_for_championship(
        &self,
        championship_id: &ChampionshipId,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE championship_id = $1")
            .bind(championship_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete enrollments: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete_for_team(&self, team_id: &TeamId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE team_id = $1")
            .bind(team_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete enrollments: {}", e)))?;

        Ok(result.rows_affected())
    }
}

fn row_to_enrollment(row: &sqlx::postgres::PgRow) -> Result<Enrollment, DomainError> {
    let championship_id: String = row.get("championship_id");
    let team_id: String = row.get("team_id");
    let enrolled_at: chrono::DateTime<chrono::Utc> = row.get("enrolled_at");

    let championship_id = ChampionshipId::new(championship_id)
        .map_err(|e| DomainError::storage(format!("Invalid championship ID in database: {}", e)))?;
    let team_id = TeamId::new(team_id)
        .map_err(|e| DomainError::storage(format!("Invalid team ID in database: {}", e)))?;

    Ok(Enrollment::from_parts(championship_id, team_id, enrolled_at))
}
