//! Championship validation

use thiserror::Error;

use super::entity::ChampionshipScope;

/// Errors that can occur during championship validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChampionshipValidationError {
    #[error("Championship ID cannot be empty")]
    EmptyId,

    #[error("Championship ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Championship ID can only contain alphanumeric characters and hyphens")]
    InvalidIdCharacters,

    #[error("Championship ID cannot start or end with a hyphen")]
    InvalidIdFormat,

    #[error("Championship name must be between {0} and {1} characters")]
    InvalidNameLength(usize, usize),

    #[error("Country must be between {0} and {1} characters")]
    InvalidCountryLength(usize, usize),

    #[error("Minimum teams must be between {0} and {1}")]
    MinTeamsOutOfRange(u32, u32),

    #[error("Maximum teams must be between {0} and {1}")]
    MaxTeamsOutOfRange(u32, u32),

    #[error("Minimum teams cannot exceed maximum teams")]
    MinExceedsMax,
}

const MAX_CHAMPIONSHIP_ID_LENGTH: usize = 64;
const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;
const MIN_COUNTRY_LENGTH: usize = 2;
const MAX_COUNTRY_LENGTH: usize = 50;

/// Inclusive bounds for the roster limits
pub const MIN_TEAMS_RANGE: (u32, u32) = (2, 32);
pub const MAX_TEAMS_RANGE: (u32, u32) = (2, 64);

/// Validate a championship ID
pub fn validate_championship_id(id: &str) -> Result<(), ChampionshipValidationError> {
    if id.is_empty() {
        return Err(ChampionshipValidationError::EmptyId);
    }

    if id.len() > MAX_CHAMPIONSHIP_ID_LENGTH {
        return Err(ChampionshipValidationError::IdTooLong(
            MAX_CHAMPIONSHIP_ID_LENGTH,
        ));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ChampionshipValidationError::InvalidIdCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(ChampionshipValidationError::InvalidIdFormat);
    }

    Ok(())
}

/// Validate a championship name
pub fn validate_championship_name(name: &str) -> Result<(), ChampionshipValidationError> {
    let len = name.trim().chars().count();

    if len < MIN_NAME_LENGTH || len > MAX_NAME_LENGTH {
        return Err(ChampionshipValidationError::InvalidNameLength(
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a scope qualifier
///
/// The tagged representation already guarantees that only the relevant
/// qualifier exists per level; this checks the qualifier's own constraints.
pub fn validate_scope(scope: &ChampionshipScope) -> Result<(), ChampionshipValidationError> {
    match scope {
        ChampionshipScope::National { country } => {
            let len = country.trim().chars().count();
            if len < MIN_COUNTRY_LENGTH || len > MAX_COUNTRY_LENGTH {
                return Err(ChampionshipValidationError::InvalidCountryLength(
                    MIN_COUNTRY_LENGTH,
                    MAX_COUNTRY_LENGTH,
                ));
            }
            Ok(())
        }
        ChampionshipScope::Continental { .. } | ChampionshipScope::Global => Ok(()),
    }
}

/// Validate the roster limits, including min <= max
pub fn validate_team_limits(
    min_teams: u32,
    max_teams: u32,
) -> Result<(), ChampionshipValidationError> {
    if !(MIN_TEAMS_RANGE.0..=MIN_TEAMS_RANGE.1).contains(&min_teams) {
        return Err(ChampionshipValidationError::MinTeamsOutOfRange(
            MIN_TEAMS_RANGE.0,
            MIN_TEAMS_RANGE.1,
        ));
    }

    if !(MAX_TEAMS_RANGE.0..=MAX_TEAMS_RANGE.1).contains(&max_teams) {
        return Err(ChampionshipValidationError::MaxTeamsOutOfRange(
            MAX_TEAMS_RANGE.0,
            MAX_TEAMS_RANGE.1,
        ));
    }

    if min_teams > max_teams {
        return Err(ChampionshipValidationError::MinExceedsMax);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::Continent;

    #[test]
    fn test_valid_championship_id() {
        assert!(validate_championship_id("champ-1").is_ok());
        assert!(validate_championship_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
    }

    #[test]
    fn test_invalid_championship_id() {
        assert_eq!(
            validate_championship_id(""),
            Err(ChampionshipValidationError::EmptyId)
        );
        assert_eq!(
            validate_championship_id("champ_1"),
            Err(ChampionshipValidationError::InvalidIdCharacters)
        );
        assert_eq!(
            validate_championship_id("-champ"),
            Err(ChampionshipValidationError::InvalidIdFormat)
        );
    }

    #[test]
    fn test_valid_name() {
        assert!(validate_championship_name("Copa do Brasil").is_ok());
        assert!(validate_championship_name("CL").is_ok());
    }

    #[test]
    fn test_invalid_name() {
        assert_eq!(
            validate_championship_name("C"),
            Err(ChampionshipValidationError::InvalidNameLength(2, 100))
        );
        assert_eq!(
            validate_championship_name(&"a".repeat(101)),
            Err(ChampionshipValidationError::InvalidNameLength(2, 100))
        );
    }

    #[test]
    fn test_scope_national_country_bounds() {
        let valid = ChampionshipScope::National {
            country: "Brazil".to_string(),
        };
        assert!(validate_scope(&valid).is_ok());

        let too_short = ChampionshipScope::National {
            country: "B".to_string(),
        };
        assert_eq!(
            validate_scope(&too_short),
            Err(ChampionshipValidationError::InvalidCountryLength(2, 50))
        );
    }

    #[test]
    fn test_scope_continental_and_global_always_valid() {
        let continental = ChampionshipScope::Continental {
            continent: Continent::Europe,
        };
        assert!(validate_scope(&continental).is_ok());
        assert!(validate_scope(&ChampionshipScope::Global).is_ok());
    }

    #[test]
    fn test_team_limits() {
        assert!(validate_team_limits(2, 2).is_ok());
        assert!(validate_team_limits(2, 64).is_ok());
        assert!(validate_team_limits(32, 64).is_ok());

        assert_eq!(
            validate_team_limits(1, 16),
            Err(ChampionshipValidationError::MinTeamsOutOfRange(2, 32))
        );
        assert_eq!(
            validate_team_limits(33, 64),
            Err(ChampionshipValidationError::MinTeamsOutOfRange(2, 32))
        );
        assert_eq!(
            validate_team_limits(2, 65),
            Err(ChampionshipValidationError::MaxTeamsOutOfRange(2, 64))
        );
        assert_eq!(
            validate_team_limits(2, 1),
            Err(ChampionshipValidationError::MaxTeamsOutOfRange(2, 64))
        );
    }

    #[test]
    fn test_min_exceeds_max() {
        assert_eq!(
            validate_team_limits(16, 8),
            Err(ChampionshipValidationError::MinExceedsMax)
        );
    }
}
