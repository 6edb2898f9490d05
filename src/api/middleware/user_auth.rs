//! Request authentication via JWT bearer tokens

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;

/// Extractor that rejects the request unless it carries a valid
/// `Authorization: Bearer <token>` header for an existing account.
///
/// Handlers take `RequireUser` as an argument and read the caller's
/// account out of it.
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = state
            .jwt_service
            .validate(token)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        debug!(user_id = %claims.user_id(), "Authenticated request");

        // Tokens can outlive the account, so the user is re-fetched on
        // every request
        let user = state
            .user_service
            .get(claims.user_id())
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?
            .ok_or_else(|| ApiError::unauthorized("Account no longer exists"))?;

        Ok(RequireUser(user))
    }
}

/// Pull the bearer token out of the Authorization header
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::unauthorized(
                "Authentication required. Provide 'Authorization: Bearer <token>'",
            )
        })?
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::unauthorized("Unsupported authorization scheme, expected 'Bearer <token>'")
        })
}
