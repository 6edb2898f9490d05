//! JWT issuing and validation for API sessions

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::user::User;
use crate::domain::DomainError;

/// Claims carried inside an issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject, the account's user ID
    pub sub: String,
    /// Email address at issue time
    pub email: String,
    /// Issued-at, Unix seconds
    pub iat: i64,
    /// Expiration, Unix seconds
    pub exp: i64,
}

impl JwtClaims {
    /// Build claims for a freshly authenticated user
    pub fn new(user: &User, expiration_hours: u64) -> Self {
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::hours(expiration_hours as i64);

        Self {
            sub: user.id().as_str().to_string(),
            email: user.email().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Whether the expiration timestamp has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// The account's user ID
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// Signing configuration for the token service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for HS256 signatures
    pub secret: String,
    /// Token lifetime in hours
    pub expiration_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

/// Token operations the API layer depends on
pub trait JwtGenerator: Send + Sync + Debug {
    /// Issue a signed token for a user
    fn generate(&self, user: &User) -> Result<String, DomainError>;

    /// Validate a token's signature and expiration, returning its claims
    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError>;

    /// Lifetime applied to newly issued tokens, in hours
    fn expiration_hours(&self) -> u64;
}

/// HS256-signed token service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: u64,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &"HS256")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl JwtService {
    /// Create a token service from signing configuration
    pub fn new(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }
}

impl JwtGenerator for JwtService {
    fn generate(&self, user: &User) -> Result<String, DomainError> {
        let claims = JwtClaims::new(user, self.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign JWT: {}", e)))
    }

    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        // Validation::default() checks both the HS256 signature and `exp`
        decode::<JwtClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| DomainError::validation(format!("Invalid JWT: {}", e)))
    }

    fn expiration_hours(&self) -> u64 {
        self.expiration_hours
    }
}
