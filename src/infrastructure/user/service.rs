//! User service for registration and authentication

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::user::{
    validate_email, validate_password, validate_user_name, User, UserId, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User service for registration and authentication
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user account
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        let name = request.name.trim();
        let email = normalize_email(&request.email);

        // Validate inputs
        validate_user_name(name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        // Check if email is already registered
        if self.repository.email_exists(&email).await? {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                email
            )));
        }

        // Hash the password
        let password_hash = self.hasher.hash(&request.password)?;

        let user_id = UserId::new(Uuid::new_v4().to_string())
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let user = User::new(user_id, name, email, password_hash);

        self.repository.create(user).await
    }

    /// Authenticate a user with email and password
    ///
    /// Returns `None` for both unknown email and wrong password so callers
    /// cannot tell which one failed.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let email = normalize_email(email);

        let user = match self.repository.get_by_email(&email).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        // Record login
        self.repository.record_login(user.id()).await?;

        // Re-fetch user to get updated last_login_at
        self.repository.get(user.id()).await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get(&user_id).await
    }
}

/// Lowercase and trim an email so lookups are case-insensitive
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
