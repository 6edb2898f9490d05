//! Authentication API endpoints
//!
//! Registration, login, logout and profile endpoints for JWT-based
//! authentication.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::RegisterUserRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/profile", get(profile))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterApiRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for register and login: the account plus a fresh token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub expires_at: String,
}

/// User response (safe to expose; never carries the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl UserResponse {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
            last_login_at: user.last_login_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Profile response: the account plus what it owns
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub team_count: usize,
    pub championship_count: usize,
}

/// Register a new account
///
/// POST /api/auth/register
///
/// Returns the created user and a JWT token, so clients are logged in
/// straight away.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterApiRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    debug!(email = %request.email, "Registering user");

    let user = state
        .user_service
        .register(RegisterUserRequest {
            name: request.name,
            email: request.email,
            password: request.password,
        })
        .await
        .map_err(ApiError::from)?;

    let response = auth_response(&state, &user)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /api/auth/login
///
/// Returns a JWT token on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.email, &request.password)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    Ok(Json(auth_response(&state, &user)?))
}

/// Logout (client-side only for stateless JWT)
///
/// POST /api/auth/logout
///
/// For JWT tokens, logout is handled client-side by discarding the token.
/// This endpoint exists for API consistency.
pub async fn logout(_user: RequireUser) -> Result<Json<LogoutResponse>, ApiError> {
    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get the authenticated account and its owned entity counts
///
/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let team_count = state
        .team_service
        .count(user.id())
        .await
        .map_err(ApiError::from)?;

    let championship_count = state
        .championship_service
        .count(user.id())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from_user(&user),
        team_count,
        championship_count,
    }))
}

fn auth_response(state: &AppState, user: &User) -> Result<AuthResponse, ApiError> {
    let token = state
        .jwt_service
        .generate(user)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let expires_at = Utc::now() + Duration::hours(state.jwt_service.expiration_hours() as i64);

    Ok(AuthResponse {
        user: UserResponse::from_user(user),
        token,
        expires_at: expires_at.to_rfc3339(),
    })
}
