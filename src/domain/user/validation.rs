//! User validation

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("User ID can only contain alphanumeric characters and hyphens")]
    InvalidIdCharacters,

    #[error("User ID cannot start or end with a hyphen")]
    InvalidIdFormat,

    #[error("Name must be between {0} and {1} characters")]
    InvalidNameLength(usize, usize),

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Password cannot exceed {0} characters")]
    PasswordTooLong(usize),
}

const MAX_USER_ID_LENGTH: usize = 64;
const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 50;
const MAX_EMAIL_LENGTH: usize = 255;
const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a user ID
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.len() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(UserValidationError::InvalidIdCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(UserValidationError::InvalidIdFormat);
    }

    Ok(())
}

/// Validate a user's display name
pub fn validate_user_name(name: &str) -> Result<(), UserValidationError> {
    let len = name.trim().chars().count();

    if len < MIN_NAME_LENGTH || len > MAX_NAME_LENGTH {
        return Err(UserValidationError::InvalidNameLength(
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        ));
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.len() > MAX_EMAIL_LENGTH || !email.validate_email() {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a plaintext password (before hashing)
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}
