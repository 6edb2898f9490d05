//! Password hashing built on Argon2

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Hashing strategy for stored credentials.
///
/// Implementations must embed the salt in the returned hash string so
/// `verify` needs nothing besides the stored value.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash. Unparseable
    /// hashes verify as false rather than erroring.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2id hasher using the library's default parameters
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_round_trip() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("keeper_of_secrets1").unwrap();

        assert!(hasher.verify("keeper_of_secrets1", &hash));
        assert!(!hasher.verify("keeper_of_secrets2", &hash));
    }

    #[test]
    fn test_salted_hashes_differ() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash("keeper_of_secrets1").unwrap();
        let second = hasher.hash("keeper_of_secrets1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("keeper_of_secrets1", &first));
        assert!(hasher.verify("keeper_of_secrets1", &second));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("password", "not-a-phc-string"));
        assert!(!hasher.verify("password", ""));
    }
}
