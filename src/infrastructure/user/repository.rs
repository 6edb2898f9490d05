//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    /// Index for email -> user ID lookup
    email_index: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            email_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email_index = self.email_index.read().await;

        if let Some(user_id) = email_index.get(email) {
            let users = self.users.read().await;
            return Ok(users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;

        let id = user.id().as_str().to_string();
        let email = user.email().to_string();

        if users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        if email_index.contains_key(&email) {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                email
            )));
        }

        email_index.insert(email, id.clone());
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn record_login(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        if let Some(user) = users.get_mut(id.as_str()) {
            user.record_login();
            Ok(())
        } else {
            Err(DomainError::not_found(format!("User '{}' not found", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: &str, email: &str) -> User {
        let user_id = UserId::new(id).unwrap();
        User::new(user_id, "Test User", email, "hashed_password")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "test@example.com");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.get(user.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().email(), "test@example.com");
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "test@example.com");

        repo.create(user).await.unwrap();

        let retrieved = repo.get_by_email("test@example.com").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id().as_str(), "user-1");

        let not_found = repo.get_by_email("nobody@example.com").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let repo = InMemoryUserRepository::new();
        let user1 = create_test_user("user-1", "first@example.com");
        let user2 = create_test_user("user-1", "second@example.com");

        repo.create(user1).await.unwrap();

        let result = repo.create(user2).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        let user1 = create_test_user("user-1", "same@example.com");
        let user2 = create_test_user("user-2", "same@example.com");

        repo.create(user1).await.unwrap();

        let result = repo.create(user2).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_email_exists() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "test@example.com");

        repo.create(user).await.unwrap();

        assert!(repo.email_exists("test@example.com").await.unwrap());
        assert!(!repo.email_exists("nobody@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_record_login() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "test@example.com");

        repo.create(user.clone()).await.unwrap();

        let before = repo.get(user.id()).await.unwrap().unwrap();
        assert!(before.last_login_at().is_none());

        repo.record_login(user.id()).await.unwrap();

        let after = repo.get(user.id()).await.unwrap().unwrap();
        assert!(after.last_login_at().is_some());
    }

    #[tokio::test]
    async fn test_record_login_missing_user() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("user-1").unwrap();

        let result = repo.record_login(&id).await;
        assert!(result.is_err());
    }
}
