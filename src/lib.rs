//! Touchline API
//!
//! A football club management platform with support for:
//! - Account registration and JWT-backed sessions
//! - Team squads with per-skill ratings
//! - Championships scoped to a country, a continent or the whole world
//! - Eligibility-checked enrollment of teams into championships

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::championship::ChampionshipRepository;
use domain::enrollment::EnrollmentRepository;
use domain::team::TeamRepository;
use domain::user::UserRepository;
use infrastructure::auth::{JwtConfig, JwtGenerator, JwtService};
use infrastructure::championship::{
    ChampionshipService, InMemoryChampionshipRepository, PostgresChampionshipRepository,
};
use infrastructure::enrollment::{
    EnrollmentService, InMemoryEnrollmentRepository, PostgresEnrollmentRepository,
};
use infrastructure::storage::{create_pool, ensure_schema, PostgresConfig, StorageType};
use infrastructure::team::{InMemoryTeamRepository, PostgresTeamRepository, TeamService};
use infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService,
};
use rand::Rng;
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend =
        StorageType::parse(&config.storage.backend).unwrap_or(StorageType::InMemory);

    info!("Storage backend: {:?}", storage_backend);

    let jwt_service = create_jwt_service_from_secret(config);

    match storage_backend {
        StorageType::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PostgresConfig::new(database_url)).await?;
            ensure_schema(&pool).await?;
            info!("PostgreSQL connection established");

            Ok(build_state(
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresTeamRepository::new(pool.clone())),
                Arc::new(PostgresChampionshipRepository::new(pool.clone())),
                Arc::new(PostgresEnrollmentRepository::new(pool)),
                jwt_service,
            ))
        }
        StorageType::InMemory => {
            info!("Using in-memory storage");
            Ok(build_state(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryTeamRepository::new()),
                Arc::new(InMemoryChampionshipRepository::new()),
                Arc::new(InMemoryEnrollmentRepository::new()),
                jwt_service,
            ))
        }
    }
}

/// Wire the services over a concrete repository set
fn build_state<U, T, C, E>(
    users: Arc<U>,
    teams: Arc<T>,
    championships: Arc<C>,
    enrollments: Arc<E>,
    jwt_service: Arc<dyn JwtGenerator>,
) -> AppState
where
    U: UserRepository + 'static,
    T: TeamRepository + 'static,
    C: ChampionshipRepository + 'static,
    E: EnrollmentRepository + 'static,
{
    let hasher = Arc::new(Argon2Hasher::new());

    let user_service = Arc::new(UserService::new(users, hasher));
    let team_service = Arc::new(TeamService::new(teams.clone(), enrollments.clone()));
    let championship_service = Arc::new(ChampionshipService::new(
        championships.clone(),
        enrollments.clone(),
    ));
    let enrollment_service = Arc::new(EnrollmentService::new(championships, teams, enrollments));

    AppState::new(
        user_service,
        team_service,
        championship_service,
        enrollment_service,
        jwt_service,
    )
}

/// Generate a random JWT secret
fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Create the JWT service from a secret (config, env var, or random)
fn create_jwt_service_from_secret(config: &AppConfig) -> Arc<dyn JwtGenerator> {
    let jwt_secret = config
        .auth
        .jwt_secret
        .clone()
        .or_else(|| std::env::var("JWT_SECRET").ok())
        .unwrap_or_else(|| {
            tracing::warn!(
                "No JWT_SECRET configured. Generating random secret. \
                Sessions will NOT persist across restarts."
            );
            generate_random_secret()
        });

    Arc::new(JwtService::new(JwtConfig::new(
        jwt_secret,
        config.auth.jwt_expiration_hours,
    )))
}
