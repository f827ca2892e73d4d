//! The persisted user profile and its building blocks.
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::DEFAULT_MAX_XP;
use crate::items::InventoryItem;

/// One of the three regional language tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Sasak,
    Samawa,
    Mbojo,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Sasak, Self::Samawa, Self::Mbojo];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sasak => "Sasak",
            Self::Samawa => "Samawa",
            Self::Mbojo => "Mbojo",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sasak" => Ok(Self::Sasak),
            "Samawa" => Ok(Self::Samawa),
            "Mbojo" => Ok(Self::Mbojo),
            _ => Err(()),
        }
    }
}

/// An achievement badge. The badge set is fixed at profile creation; only
/// `earned` ever mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub earned: bool,
}

/// One calendar day in the login-streak window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakEntry {
    pub date: NaiveDate,
    pub active: bool,
}

/// Rolling window of the most recent login days, oldest first, unique by
/// date, at most seven entries.
pub type StreakHistory = SmallVec<[StreakEntry; 7]>;

/// Rejection reasons for profile creation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NewProfileError {
    #[error("display name must not be empty")]
    EmptyName,
}

/// The root aggregate persisted as a single snapshot. Owned exclusively by
/// the running client session; see `ProgressStore` for the mutation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub level: u32,
    pub xp: u32,
    /// XP threshold for a level-up. Fixed; not rescaled when leveling.
    pub max_xp: u32,
    pub selected_language: Option<Language>,
    pub badges: Vec<Badge>,
    /// Append-only from the engine's perspective.
    pub inventory: Vec<InventoryItem>,
    /// Consecutive calendar days with a recorded login.
    pub streak: u32,
    pub last_login: Option<NaiveDateTime>,
    #[serde(default)]
    pub streak_history: StreakHistory,
    /// Max unlocked level per game track key, 1-based.
    #[serde(default)]
    pub game_progress: BTreeMap<String, u32>,
}

impl UserProfile {
    /// Create a fresh profile with default progression state. The first
    /// login is not recorded here; callers run the streak evaluation as
    /// part of session start.
    ///
    /// # Errors
    ///
    /// Returns [`NewProfileError::EmptyName`] when the trimmed display name
    /// is empty.
    pub fn new(name: &str, language: Language) -> Result<Self, NewProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NewProfileError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            level: 1,
            xp: 0,
            max_xp: DEFAULT_MAX_XP,
            selected_language: Some(language),
            badges: crate::content::default_badges(),
            inventory: Vec::new(),
            streak: 0,
            last_login: None,
            streak_history: SmallVec::new(),
            game_progress: crate::content::initial_game_progress(),
        })
    }

    /// Whether the inventory already holds an item with this catalog id.
    #[must_use]
    pub fn owns(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|item| item.id == item_id)
    }

    /// Max unlocked level for a track key; an unknown key reads as 0.
    #[must_use]
    pub fn unlocked_level(&self, game_key: &str) -> u32 {
        self.game_progress.get(game_key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_profile_defaults() {
        let profile = UserProfile::new("Baiq Sari", Language::Sasak).unwrap();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.max_xp, 1_000);
        assert_eq!(profile.selected_language, Some(Language::Sasak));
        assert_eq!(profile.streak, 0);
        assert!(profile.inventory.is_empty());
        assert!(profile.streak_history.is_empty());
        assert!(profile.badges.iter().all(|badge| !badge.earned));
        assert_eq!(profile.unlocked_level("story"), 1);
        assert_eq!(profile.unlocked_level("pasarKata_Sasak"), 1);
        assert_eq!(profile.unlocked_level("nonexistent"), 0);
    }

    #[test]
    fn empty_or_blank_name_is_rejected() {
        assert_eq!(
            UserProfile::new("", Language::Mbojo),
            Err(NewProfileError::EmptyName)
        );
        assert_eq!(
            UserProfile::new("   ", Language::Mbojo),
            Err(NewProfileError::EmptyName)
        );
    }

    #[test]
    fn name_is_trimmed() {
        let profile = UserProfile::new("  Lalu Wira ", Language::Samawa).unwrap();
        assert_eq!(profile.name, "Lalu Wira");
    }

    #[test]
    fn profile_snapshot_roundtrips() {
        let mut profile = UserProfile::new("Penjaga", Language::Mbojo).unwrap();
        profile.xp = 420;
        profile.streak = 3;
        profile
            .game_progress
            .insert("legenda_Mbojo".to_string(), 4);

        let saved = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&saved).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn language_string_roundtrip() {
        for language in Language::ALL {
            assert_eq!(language.as_str().parse::<Language>(), Ok(language));
        }
        assert!("Bugis".parse::<Language>().is_err());
    }
}
