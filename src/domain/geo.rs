//! Geographic types shared by teams and championships

use serde::{Deserialize, Serialize};

/// Continent a team belongs to
///
/// Closed set: continental championships compare this value by exact
/// equality, so no free-form variant exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continent {
    SouthAmerica,
    NorthAmerica,
    Europe,
    Africa,
    Asia,
    Oceania,
}

impl Continent {
    /// All continents, in display order
    pub const ALL: [Continent; 6] = [
        Continent::SouthAmerica,
        Continent::NorthAmerica,
        Continent::Europe,
        Continent::Africa,
        Continent::Asia,
        Continent::Oceania,
    ];

    /// Wire representation used by the API and the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SouthAmerica => "south_america",
            Self::NorthAmerica => "north_america",
            Self::Europe => "europe",
            Self::Africa => "africa",
            Self::Asia => "asia",
            Self::Oceania => "oceania",
        }
    }

    /// Parse the wire representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "south_america" => Some(Self::SouthAmerica),
            "north_america" => Some(Self::NorthAmerica),
            "europe" => Some(Self::Europe),
            "africa" => Some(Self::Africa),
            "asia" => Some(Self::Asia),
            "oceania" => Some(Self::Oceania),
            _ => None,
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown continent: '{}'", s))
    }
}
