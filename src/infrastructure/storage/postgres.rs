//! PostgreSQL pool construction and schema bootstrap

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::DomainError;

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/touchline".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Create a connection pool from the configuration
pub async fn create_pool(config: &PostgresConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(std::time::Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// Schema statements, one per table plus supporting indexes.
///
/// The enrollments primary key doubles as the pair-uniqueness constraint,
/// and the foreign keys cascade so the database backstops the cascades the
/// services perform themselves.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id VARCHAR(64) PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        last_login_at TIMESTAMPTZ
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teams (
        id VARCHAR(64) PRIMARY KEY,
        owner_id VARCHAR(64) NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        name VARCHAR(50) NOT NULL,
        primary_color CHAR(7) NOT NULL,
        secondary_color CHAR(7) NOT NULL,
        country VARCHAR(50) NOT NULL,
        continent VARCHAR(16) NOT NULL,
        attack SMALLINT NOT NULL,
        midfield SMALLINT NOT NULL,
        defense SMALLINT NOT NULL,
        resistance SMALLINT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_teams_owner ON teams(owner_id)",
    r#"
    CREATE TABLE IF NOT EXISTS championships (
        id VARCHAR(64) PRIMARY KEY,
        owner_id VARCHAR(64) NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        name VARCHAR(100) NOT NULL,
        level VARCHAR(16) NOT NULL,
        country VARCHAR(50),
        continent VARCHAR(16),
        min_teams INTEGER NOT NULL,
        max_teams INTEGER NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        CONSTRAINT championships_scope_check CHECK (
            (level = 'national' AND country IS NOT NULL AND continent IS NULL)
            OR (level = 'continental' AND country IS NULL AND continent IS NOT NULL)
            OR (level = 'global' AND country IS NULL AND continent IS NULL)
        )
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_championships_owner ON championships(owner_id)",
    r#"
    CREATE TABLE IF NOT EXISTS enrollments (
        championship_id VARCHAR(64) NOT NULL REFERENCES championships(id) ON DELETE CASCADE,
        team_id VARCHAR(64) NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
        enrolled_at TIMESTAMPTZ NOT NULL,
        PRIMARY KEY (championship_id, team_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_enrollments_team ON enrollments(team_id)",
];

/// Ensure every table and index exists
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create schema: {}", e)))?;
    }

    Ok(())
}
