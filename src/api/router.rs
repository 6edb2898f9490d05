use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::championships;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::teams;

/// Assemble the application router
///
/// Probes stay outside `/api` and outside authentication so load balancers
/// can reach them. Register and login are the only unauthenticated routes
/// under `/api`; everything else pulls the account out of the bearer token.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api/auth", auth::create_auth_router())
        .nest("/api/teams", teams::create_teams_router())
        .nest(
            "/api/championships",
            championships::create_championships_router(),
        )
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
