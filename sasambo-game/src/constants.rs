//! Centralized balance and tuning constants for the Sasambo progression
//! engine.
//!
//! These values define the deterministic math for XP, rewards, streaks and
//! level sampling. Keeping them together ensures that progression can only
//! be adjusted via code changes reviewed in version control.

// Progression tuning --------------------------------------------------------
pub(crate) const XP_PER_CORRECT_ANSWER: u32 = 10;
pub(crate) const DEFAULT_MAX_XP: u32 = 1_000;
/// Fraction of a level's questions that must be answered correctly to pass.
pub(crate) const LEVEL_PASS_RATIO: f64 = 0.6;

// Reward tuning --------------------------------------------------------------
/// An intermediate clear grants a reward when a uniform draw lands above
/// this, i.e. with 30% probability.
pub(crate) const INTERMEDIATE_REWARD_GATE: f64 = 0.7;
/// Tier draw above this picks Pemangku (top 10% of the draw space).
pub(crate) const TIER_DRAW_PEMANGKU: f64 = 0.90;
/// Tier draw above this picks Ketua Karang (next 30%); the remaining 60%
/// falls through to Jajarkarang.
pub(crate) const TIER_DRAW_KETUA_KARANG: f64 = 0.60;

// Streak tuning --------------------------------------------------------------
/// Number of calendar days kept in the streak history window.
pub(crate) const STREAK_HISTORY_LEN: usize = 7;

// Level-set geometry ----------------------------------------------------------
pub(crate) const DEFAULT_LEVEL_COUNT: usize = 20;
/// Sampling window as a fraction of the pool, floored at `WINDOW_MIN`.
pub(crate) const WINDOW_POOL_RATIO: f64 = 0.35;
pub(crate) const WINDOW_MIN: usize = 5;
/// Random re-draws per question slot before falling back to a linear scan.
pub(crate) const SAMPLE_RETRY_LIMIT: usize = 15;

// Story-mode scoring ----------------------------------------------------------
/// Speech similarity above this is scored as a perfect 100.
pub(crate) const PRONUNCIATION_PASS_SIMILARITY: f64 = 0.8;
pub(crate) const PRONUNCIATION_SCORE_FLOOR: u32 = 75;
pub(crate) const PRONUNCIATION_SCORE_CEIL: u32 = 92;
