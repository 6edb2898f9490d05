//! PostgreSQL championship repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::championship::{
    Championship, ChampionshipId, ChampionshipRepository, ChampionshipScope,
};
use crate::domain::geo::Continent;
use crate::domain::user::UserId;
use crate::domain::DomainError;

const SELECT_COLUMNS: &str =
    "id, owner_id, name, level, country, continent, min_teams, max_teams, created_at, updated_at";

/// PostgreSQL implementation of ChampionshipRepository
///
/// The scope enum is stored as a `level` column plus nullable `country` and
/// `continent` columns; a CHECK constraint in the schema keeps the unused
/// qualifier NULL.
#[derive(Debug, Clone)]
pub struct PostgresChampionshipRepository {
    pool: PgPool,
}

impl PostgresChampionshipRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChampionshipRepository for PostgresChampionshipRepository {
    async fn get(&self, id: &ChampionshipId) -> Result<Option<Championship>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM championships WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get championship: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_championship(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_owned(
        &self,
        id: &ChampionshipId,
        owner_id: &UserId,
    ) -> Result<Option<Championship>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM championships WHERE id = $1 AND owner_id = $2",
            SELECT_COLUMNS
        ))
        .bind(id.as_str())
        .bind(owner_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get championship: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_championship(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Championship>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM championships WHERE owner_id = $1 ORDER BY name, id",
            SELECT_COLUMNS
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list championships: {}", e)))?;

        let mut championships = Vec::with_capacity(rows.len());

        for row in rows {
            championships.push(row_to_championship(&row)?);
        }

        Ok(championships)
    }

    async fn count_by_owner(&self, owner_id: &UserId) -> Result<usize, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM championships WHERE owner_id = $1")
                .bind(owner_id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to count championships: {}", e))
                })?;

        Ok(count as usize)
    }

    async fn create(&self, championship: Championship) -> Result<Championship, DomainError> {
        let (country, continent) = scope_to_columns(championship.scope());

        sqlx::query(
            r#"
            INSERT INTO championships (id, owner_id, name, level, country, continent,
                                       min_teams, max_teams, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(championship.id().as_str())
        .bind(championship.owner_id().as_str())
        .bind(championship.name())
        .bind(championship.scope().level())
        .bind(country)
        .bind(continent)
        .bind(championship.min_teams() as i32)
        .bind(championship.max_teams() as i32)
        .bind(championship.created_at())
        .bind(championship.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Championship with ID '{}' already exists",
                    championship.id().as_str()
                ))
            } else {
                DomainError::storage(format!("Failed to create championship: {}", e))
            }
        })?;

        Ok(championship)
    }

    async fn update(&self, championship: Championship) -> Result<Championship, DomainError> {
        let (country, continent) = scope_to_columns(championship.scope());

        let result = sqlx::query(
            r#"
            UPDATE championships
            SET name = $2, level = $3, country = $4, continent = $5,
                min_teams = $6, max_teams = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(championship.id().as_str())
        .bind(championship.name())
        .bind(championship.scope().level())
        .bind(country)
        .bind(continent)
        .bind(championship.min_teams() as i32)
        .bind(championship.max_teams() as i32)
        .bind(championship.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update championship: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Championship '{}' not found",
                championship.id().as_str()
            )));
        }

        Ok(championship)
    }

    async fn delete(&self, id: &ChampionshipId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM championships WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete championship: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn scope_to_columns(scope: &ChampionshipScope) -> (Option<&str>, Option<&str>) {
    match scope {
        ChampionshipScope::National { country } => (Some(country.as_str()), None),
        ChampionshipScope::Continental { continent } => (None, Some(continent.as_str())),
        ChampionshipScope::Global => (None, None),
    }
}

fn scope_from_columns(
    level: &str,
    country: Option<String>,
    continent: Option<String>,
) -> Result<ChampionshipScope, DomainError> {
    match level {
        "national" => {
            let country = country.ok_or_else(|| {
                DomainError::storage("National championship without a country in database")
            })?;
            Ok(ChampionshipScope::National { country })
        }
        "continental" => {
            let continent = continent.ok_or_else(|| {
                DomainError::storage("Continental championship without a continent in database")
            })?;
            let continent = Continent::parse(&continent).ok_or_else(|| {
                DomainError::storage(format!("Invalid continent '{}' in database", continent))
            })?;
            Ok(ChampionshipScope::Continental { continent })
        }
        "global" => Ok(ChampionshipScope::Global),
        other => Err(DomainError::storage(format!(
            "Invalid championship level '{}' in database",
            other
        ))),
    }
}

fn row_to_championship(row: &sqlx::postgres::PgRow) -> Result<Championship, DomainError> {
    let id: String = row.get("id");
    let owner_id: String = row.get("owner_id");
    let name: String = row.get("name");
    let level: String = row.get("level");
    let country: Option<String> = row.get("country");
    let continent: Option<String> = row.get("continent");
    let min_teams: i32 = row.get("min_teams");
    let max_teams: i32 = row.get("max_teams");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let championship_id = ChampionshipId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid championship ID in database: {}", e)))?;
    let owner_id = UserId::new(owner_id)
        .map_err(|e| DomainError::storage(format!("Invalid owner ID in database: {}", e)))?;
    let scope = scope_from_columns(&level, country, continent)?;

    Ok(Championship::from_parts(
        championship_id,
        owner_id,
        name,
        scope,
        min_teams as u32,
        max_teams as u32,
        created_at,
        updated_at,
    ))
}
