//! PostgreSQL team repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::geo::Continent;
use crate::domain::team::{SkillSet, Team, TeamId, TeamRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

const SELECT_COLUMNS: &str = "id, owner_id, name, primary_color, secondary_color, country, \
     continent, attack, midfield, defense, resistance, created_at, updated_at";

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM teams WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_team(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_owned(&self, id: &TeamId, owner_id: &UserId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM teams WHERE id = $1 AND owner_id = $2",
            SELECT_COLUMNS
        ))
        .bind(id.as_str())
        .bind(owner_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_team(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM teams WHERE owner_id = $1 ORDER BY name, id",
            SELECT_COLUMNS
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        let mut teams = Vec::with_capacity(rows.len());

        for row in rows {
            teams.push(row_to_team(&row)?);
        }

        Ok(teams)
    }

    async fn count_by_owner(&self, owner_id: &UserId) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE owner_id = $1")
            .bind(owner_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count teams: {}", e)))?;

        Ok(count as usize)
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, owner_id, name, primary_color, secondary_color, country,
                               continent, attack, midfield, defense, resistance,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(team.id().as_str())
        .bind(team.owner_id().as_str())
        .bind(team.name())
        .bind(team.primary_color())
        .bind(team.secondary_color())
        .bind(team.country())
        .bind(team.continent().as_str())
        .bind(team.skills().attack as i16)
        .bind(team.skills().midfield as i16)
        .bind(team.skills().defense as i16)
        .bind(team.skills().resistance as i16)
        .bind(team.created_at())
        .bind(team.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Team with ID '{}' already exists",
                    team.id().as_str()
                ))
            } else {
                DomainError::storage(format!("Failed to create team: {}", e))
            }
        })?;

        Ok(team)
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = $2, primary_color = $3, secondary_color = $4, country = $5,
                continent = $6, attack = $7, midfield = $8, defense = $9,
                resistance = $10, updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(team.id().as_str())
        .bind(team.name())
        .bind(team.primary_color())
        .bind(team.secondary_color())
        .bind(team.country())
        .bind(team.continent().as_str())
        .bind(team.skills().attack as i16)
        .bind(team.skills().midfield as i16)
        .bind(team.skills().defense as i16)
        .bind(team.skills().resistance as i16)
        .bind(team.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update team: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                team.id().as_str()
            )));
        }

        Ok(team)
    }

    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete team: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_team(row: &sqlx::postgres::PgRow) -> Result<Team, DomainError> {
    let id: String = row.get("id");
    let owner_id: String = row.get("owner_id");
    let name: String = row.get("name");
    let primary_color: String = row.get("primary_color");
    let secondary_color: String = row.get("secondary_color");
    let country: String = row.get("country");
    let continent: String = row.get("continent");
    let attack: i16 = row.get("attack");
    let midfield: i16 = row.get("midfield");
    let defense: i16 = row.get("defense");
    let resistance: i16 = row.get("resistance");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let team_id = TeamId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid team ID in database: {}", e)))?;
    let owner_id = UserId::new(owner_id)
        .map_err(|e| DomainError::storage(format!("Invalid owner ID in database: {}", e)))?;
    let continent = Continent::parse(&continent).ok_or_else(|| {
        DomainError::storage(format!("Invalid continent '{}' in database", continent))
    })?;
    let skills = SkillSet::new(attack as u8, midfield as u8, defense as u8, resistance as u8)
        .map_err(|e| DomainError::storage(format!("Invalid skill levels in database: {}", e)))?;

    Ok(Team::from_parts(
        team_id,
        owner_id,
        name,
        primary_color,
        secondary_color,
        country,
        continent,
        skills,
        created_at,
        updated_at,
    ))
}
