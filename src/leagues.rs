//! League registry: maps human-readable league names to upstream
//! competition identifiers.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The five leagues served when the configuration does not define its own table.
pub const DEFAULT_LEAGUES: [(&str, u32); 5] = [
    ("Premier League", 2021),
    ("La Liga", 2014),
    ("Serie A", 2019),
    ("Bundesliga", 2002),
    ("Ligue 1", 2015),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueEntry {
    pub name: String,
    #[serde(rename = "competitionId", alias = "competition_id")]
    pub competition_id: u32,
}

impl LeagueEntry {
    pub fn new(name: impl Into<String>, competition_id: u32) -> Self {
        Self {
            name: name.into(),
            competition_id,
        }
    }
}

/// Immutable lookup table built once at start-up.
#[derive(Debug, Clone)]
pub struct LeagueRegistry {
    entries: Vec<LeagueEntry>,
}

impl LeagueRegistry {
    /// Builds a registry from explicit entries.
    ///
    /// # Errors
    /// * `AppError::Config` - a name is empty or duplicated, or a competition id is zero
    pub fn new(entries: Vec<LeagueEntry>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(AppError::config_error("League name cannot be empty"));
            }
            if entry.competition_id == 0 {
                return Err(AppError::config_error(format!(
                    "League '{}' has an invalid competition id 0",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(AppError::config_error(format!(
                    "Duplicate league name '{}'",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in table of Europe's top five leagues.
    pub fn top_five() -> Self {
        Self {
            entries: DEFAULT_LEAGUES
                .iter()
                .map(|(name, id)| LeagueEntry::new(*name, *id))
                .collect(),
        }
    }

    /// Uses the configured leagues, or the built-in table when none are configured.
    pub fn from_config(leagues: &[LeagueEntry]) -> Result<Self, AppError> {
        if leagues.is_empty() {
            Ok(Self::top_five())
        } else {
            Self::new(leagues.to_vec())
        }
    }

    /// Exact, case-sensitive lookup of a league name.
    pub fn lookup(&self, name: &str) -> Result<u32, AppError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.competition_id)
            .ok_or_else(|| AppError::invalid_league(Some(name)))
    }

    /// League names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[LeagueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LeagueRegistry {
    fn default() -> Self {
        Self::top_five()
    }
}
