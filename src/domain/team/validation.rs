//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Team ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Team ID can only contain alphanumeric characters and hyphens")]
    InvalidIdCharacters,

    #[error("Team ID cannot start or end with a hyphen")]
    InvalidIdFormat,

    #[error("Team name must be between {0} and {1} characters")]
    InvalidNameLength(usize, usize),

    #[error("Color must be a hex value in the form #RRGGBB")]
    InvalidColor,

    #[error("{0} level must be between {1} and {2}")]
    SkillLevelOutOfRange(&'static str, u8, u8),

    #[error("Country must be between {0} and {1} characters")]
    InvalidCountryLength(usize, usize),
}

const MAX_TEAM_ID_LENGTH: usize = 64;
const MIN_TEAM_NAME_LENGTH: usize = 2;
const MAX_TEAM_NAME_LENGTH: usize = 50;
const MIN_COUNTRY_LENGTH: usize = 2;
const MAX_COUNTRY_LENGTH: usize = 50;

/// Inclusive range for the four skill levels
pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 10;

/// Validate a team ID
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    if id.len() > MAX_TEAM_ID_LENGTH {
        return Err(TeamValidationError::IdTooLong(MAX_TEAM_ID_LENGTH));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(TeamValidationError::InvalidIdCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(TeamValidationError::InvalidIdFormat);
    }

    Ok(())
}

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    let len = name.trim().chars().count();

    if len < MIN_TEAM_NAME_LENGTH || len > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::InvalidNameLength(
            MIN_TEAM_NAME_LENGTH,
            MAX_TEAM_NAME_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a shirt color: `#` followed by six hex digits, any case
pub fn validate_color(color: &str) -> Result<(), TeamValidationError> {
    let rest = color
        .strip_prefix('#')
        .ok_or(TeamValidationError::InvalidColor)?;

    if rest.len() != 6 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TeamValidationError::InvalidColor);
    }

    Ok(())
}

/// Validate a single skill level against the inclusive [1,10] range
pub fn validate_skill_level(name: &'static str, level: u8) -> Result<(), TeamValidationError> {
    if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&level) {
        return Err(TeamValidationError::SkillLevelOutOfRange(
            name,
            MIN_SKILL_LEVEL,
            MAX_SKILL_LEVEL,
        ));
    }

    Ok(())
}

/// Validate a country name
pub fn validate_country(country: &str) -> Result<(), TeamValidationError> {
    let len = country.trim().chars().count();

    if len < MIN_COUNTRY_LENGTH || len > MAX_COUNTRY_LENGTH {
        return Err(TeamValidationError::InvalidCountryLength(
            MIN_COUNTRY_LENGTH,
            MAX_COUNTRY_LENGTH,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_id() {
        assert!(validate_team_id("team-1").is_ok());
        assert!(validate_team_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
    }

    #[test]
    fn test_invalid_team_id() {
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
        assert_eq!(
            validate_team_id("team_1"),
            Err(TeamValidationError::InvalidIdCharacters)
        );
        assert_eq!(
            validate_team_id("-team"),
            Err(TeamValidationError::InvalidIdFormat)
        );
        assert_eq!(
            validate_team_id(&"a".repeat(65)),
            Err(TeamValidationError::IdTooLong(64))
        );
    }

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("FC").is_ok());
        assert!(validate_team_name("Santos Futebol Clube").is_ok());
    }

    #[test]
    fn test_invalid_team_name() {
        assert_eq!(
            validate_team_name("F"),
            Err(TeamValidationError::InvalidNameLength(2, 50))
        );
        assert_eq!(
            validate_team_name(&"a".repeat(51)),
            Err(TeamValidationError::InvalidNameLength(2, 50))
        );
    }

    #[test]
    fn test_valid_color() {
        assert!(validate_color("#FFFFFF").is_ok());
        assert!(validate_color("#1a2b3c").is_ok());
        assert!(validate_color("#000000").is_ok());
    }

    #[test]
    fn test_invalid_color() {
        assert_eq!(validate_color("FFFFFF"), Err(TeamValidationError::InvalidColor));
        assert_eq!(validate_color("#FFF"), Err(TeamValidationError::InvalidColor));
        assert_eq!(
            validate_color("#GGGGGG"),
            Err(TeamValidationError::InvalidColor)
        );
        assert_eq!(
            validate_color("#FFFFFFF"),
            Err(TeamValidationError::InvalidColor)
        );
    }

    #[test]
    fn test_valid_skill_level() {
        assert!(validate_skill_level("attack", 1).is_ok());
        assert!(validate_skill_level("attack", 10).is_ok());
        assert!(validate_skill_level("defense", 5).is_ok());
    }

    #[test]
    fn test_invalid_skill_level() {
        assert_eq!(
            validate_skill_level("attack", 0),
            Err(TeamValidationError::SkillLevelOutOfRange("attack", 1, 10))
        );
        assert_eq!(
            validate_skill_level("midfield", 11),
            Err(TeamValidationError::SkillLevelOutOfRange("midfield", 1, 10))
        );
    }

    #[test]
    fn test_valid_country() {
        assert!(validate_country("Brazil").is_ok());
        assert!(validate_country("BR").is_ok());
    }

    #[test]
    fn test_invalid_country() {
        assert_eq!(
            validate_country("B"),
            Err(TeamValidationError::InvalidCountryLength(2, 50))
        );
        assert_eq!(
            validate_country(&"a".repeat(51)),
            Err(TeamValidationError::InvalidCountryLength(2, 50))
        );
    }
}
