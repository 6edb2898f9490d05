//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};

/// User identifier - alphanumeric + hyphens, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User account entity
///
/// The password is stored only as an argon2 hash; plaintext never reaches
/// the entity. Email is the login key and unique across accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    id: UserId,
    /// Display name
    name: String,
    /// Email address (login key, unique)
    email: String,
    /// Argon2 password hash
    password_hash: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
    /// Last successful login timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    // Mutators

    /// Record a successful login
    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }

    /// Rebuild a user from stored fields (repository use)
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        last_login_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
            last_login_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("user-1").unwrap();
        assert_eq!(id.as_str(), "user-1");
    }

    #[test]
    fn test_user_id_invalid() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("-user").is_err());
        assert!(UserId::new("user_1").is_err());
    }

    #[test]
    fn test_user_creation() {
        let id = UserId::new("user-1").unwrap();
        let user = User::new(id, "Maria", "maria@example.com", "hashed");

        assert_eq!(user.name(), "Maria");
        assert_eq!(user.email(), "maria@example.com");
        assert_eq!(user.password_hash(), "hashed");
        assert!(user.last_login_at().is_none());
    }

    #[test]
    fn test_user_record_login() {
        let id = UserId::new("user-1").unwrap();
        let mut user = User::new(id, "Maria", "maria@example.com", "hashed");

        user.record_login();
        assert!(user.last_login_at().is_some());
    }

    #[test]
    fn test_user_id_serde_rejects_invalid() {
        let result: Result<UserId, _> = serde_json::from_str("\"bad id\"");
        assert!(result.is_err());
    }
}
