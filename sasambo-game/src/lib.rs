//! Sasambo Game Engine
//!
//! Platform-agnostic progression logic for Lingo-Sasambo, a gamified
//! learning app for the Sasak, Samawa and Mbojo regional languages.
//! This crate provides the XP/level/streak/reward mechanics and the
//! embedded game content without UI or platform-specific dependencies.

pub mod constants;
pub mod content;
pub mod items;
pub mod levelgen;
pub mod profile;
pub mod reward;
pub mod session;
pub mod store;
pub mod streak;

// Re-export commonly used types
pub use content::{
    Biome, Culture, Difficulty, GameKind, LegendQuestion, MysteryQuestion, PantunCouplet,
    PantunQuestion, PasarKataQuestion, PhraseCard, QuizQuestion, ScenarioChoice,
    ScenarioQuestion, StoryLevel, default_badges, initial_game_progress, legenda_pool,
    misteri_sasambo_pool, pantun_hype_pool, pasar_kata_pool, pronunciation_score, story_levels,
    story_pool, takdir_bebas_pool, tebak_bahasa_pool,
};
pub use items::{InventoryItem, ItemCatalog, ItemKind, ItemRarity};
pub use levelgen::{generate_default_level_sets, generate_level_sets, question_count};
pub use profile::{Badge, Language, NewProfileError, StreakEntry, StreakHistory, UserProfile};
pub use reward::{pick_intermediate, roll_final, roll_intermediate};
pub use session::{LevelOutcome, PlayerSession};
pub use store::ProgressStore;
pub use streak::{Clock, SystemClock, record_login};

/// Trait for abstracting profile persistence.
/// Platform-specific implementations should provide this.
pub trait ProfileStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the persisted profile, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded or parsed.
    fn load(&self) -> Result<Option<UserProfile>, Self::Error>;

    /// Persist the profile snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved.
    fn save(&self, profile: &UserProfile) -> Result<(), Self::Error>;

    /// Delete the persisted profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile cannot be deleted.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Top-level engine tying profile persistence to session lifecycle.
pub struct ProgressEngine<S, C = SystemClock>
where
    S: ProfileStorage,
    C: Clock,
{
    storage: S,
    clock: C,
}

impl<S: ProfileStorage> ProgressEngine<S> {
    /// Create an engine on the local wall clock.
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            clock: SystemClock,
        }
    }
}

impl<S, C> ProgressEngine<S, C>
where
    S: ProfileStorage,
    C: Clock,
{
    pub const fn with_clock(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    /// Create a fresh profile, record its first login, and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty display name or a storage failure.
    pub fn sign_up(&self, name: &str, language: Language) -> Result<UserProfile, anyhow::Error> {
        let mut profile = UserProfile::new(name, language)?;
        record_login(&mut profile, self.clock.now());
        self.storage.save(&profile)?;
        Ok(profile)
    }

    /// Load the persisted profile and run the daily streak evaluation,
    /// saving the updated snapshot back. `None` means no profile exists
    /// yet (first launch or after sign-out).
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded or re-saved.
    pub fn start_session(&self) -> Result<Option<UserProfile>, anyhow::Error> {
        let Some(mut profile) = self.storage.load()? else {
            return Ok(None);
        };
        record_login(&mut profile, self.clock.now());
        self.storage.save(&profile)?;
        Ok(Some(profile))
    }

    /// Persist a profile snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be saved.
    pub fn save(&self, profile: &UserProfile) -> Result<(), S::Error> {
        self.storage.save(profile)
    }

    /// Delete the persisted profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile cannot be deleted.
    pub fn sign_out(&self) -> Result<(), S::Error> {
        self.storage.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        saved: Rc<RefCell<Option<UserProfile>>>,
    }

    impl ProfileStorage for MemoryStorage {
        type Error = Infallible;

        fn load(&self) -> Result<Option<UserProfile>, Self::Error> {
            Ok(self.saved.borrow().clone())
        }

        fn save(&self, profile: &UserProfile) -> Result<(), Self::Error> {
            *self.saved.borrow_mut() = Some(profile.clone());
            Ok(())
        }

        fn clear(&self) -> Result<(), Self::Error> {
            *self.saved.borrow_mut() = None;
            Ok(())
        }
    }

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn sign_up_persists_a_fresh_profile_with_first_login() {
        let storage = MemoryStorage::default();
        let engine = ProgressEngine::with_clock(storage.clone(), FixedClock(noon(2026, 5, 1)));
        let profile = engine.sign_up("Baiq Sari", Language::Sasak).unwrap();
        assert_eq!(profile.streak, 1);
        assert_eq!(profile.last_login, Some(noon(2026, 5, 1)));
        assert_eq!(storage.load().unwrap(), Some(profile));
    }

    #[test]
    fn sign_up_rejects_blank_names() {
        let engine =
            ProgressEngine::with_clock(MemoryStorage::default(), FixedClock(noon(2026, 5, 1)));
        assert!(engine.sign_up("  ", Language::Mbojo).is_err());
    }

    #[test]
    fn start_session_without_profile_returns_none() {
        let engine = ProgressEngine::new(MemoryStorage::default());
        assert_eq!(engine.start_session().unwrap(), None);
    }

    #[test]
    fn start_session_advances_streak_and_saves_back() {
        let storage = MemoryStorage::default();
        ProgressEngine::with_clock(storage.clone(), FixedClock(noon(2026, 5, 1)))
            .sign_up("Lalu Wira", Language::Samawa)
            .unwrap();

        let next_day = ProgressEngine::with_clock(storage.clone(), FixedClock(noon(2026, 5, 2)));
        let profile = next_day.start_session().unwrap().unwrap();
        assert_eq!(profile.streak, 2);
        assert_eq!(storage.load().unwrap(), Some(profile));
    }

    #[test]
    fn sign_out_clears_the_stored_profile() {
        let storage = MemoryStorage::default();
        let engine = ProgressEngine::with_clock(storage.clone(), FixedClock(noon(2026, 5, 1)));
        engine.sign_up("Penjaga", Language::Mbojo).unwrap();
        engine.sign_out().unwrap();
        assert_eq!(engine.start_session().unwrap(), None);
    }
}
