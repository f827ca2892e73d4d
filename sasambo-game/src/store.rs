//! Mutation API over the loaded profile.
//!
//! Every operation is a silent no-op when no profile is loaded or when an
//! id does not match, so the client stays resilient to out-of-order
//! initialization and to content added after a snapshot was persisted.
//! No-ops leave a `log` breadcrumb for hosts that want observability.
use log::debug;

use crate::items::InventoryItem;
use crate::profile::UserProfile;

/// Single source of truth for the mutable profile. Callers persist the
/// snapshot through [`crate::ProfileStorage`] after each mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    profile: Option<UserProfile>,
}

impl ProgressStore {
    #[must_use]
    pub const fn new(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    /// A store with no profile loaded; all mutations are no-ops.
    #[must_use]
    pub const fn unloaded() -> Self {
        Self { profile: None }
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn profile_mut(&mut self) -> Option<&mut UserProfile> {
        self.profile.as_mut()
    }

    #[must_use]
    pub fn into_profile(self) -> Option<UserProfile> {
        self.profile
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Drop the loaded profile (logout).
    pub fn clear(&mut self) -> Option<UserProfile> {
        self.profile.take()
    }

    /// Add XP, converting any overflow into level-ups. A single call may
    /// cross several thresholds; `max_xp` stays fixed, so post-call
    /// `xp < max_xp` always holds. The running total saturates at
    /// `u32::MAX` rather than wrapping.
    pub fn add_xp(&mut self, amount: u32) {
        let Some(profile) = self.profile.as_mut() else {
            debug!("add_xp({amount}) ignored: no profile loaded");
            return;
        };
        profile.xp = profile.xp.saturating_add(amount);
        while profile.max_xp > 0 && profile.xp >= profile.max_xp {
            profile.level += 1;
            profile.xp -= profile.max_xp;
        }
    }

    /// Mark a badge as earned. Unknown ids are ignored; repeated calls are
    /// idempotent.
    pub fn unlock_badge(&mut self, badge_id: &str) {
        let Some(profile) = self.profile.as_mut() else {
            debug!("unlock_badge({badge_id}) ignored: no profile loaded");
            return;
        };
        match profile.badges.iter_mut().find(|badge| badge.id == badge_id) {
            Some(badge) => badge.earned = true,
            None => debug!("unlock_badge ignored: unknown badge id {badge_id}"),
        }
    }

    /// Append an item to the inventory. No dedup here; exclusivity policy
    /// lives in the reward resolver.
    pub fn add_item(&mut self, item: InventoryItem) {
        let Some(profile) = self.profile.as_mut() else {
            debug!("add_item({}) ignored: no profile loaded", item.id);
            return;
        };
        profile.inventory.push(item);
    }

    /// Raise the max unlocked level for a track. Monotonic ratchet: a
    /// lower or equal value never regresses recorded progress. A missing
    /// key reads as 0, so any positive level unlocks it.
    pub fn unlock_game_level(&mut self, game_key: &str, level: u32) {
        let Some(profile) = self.profile.as_mut() else {
            debug!("unlock_game_level({game_key}, {level}) ignored: no profile loaded");
            return;
        };
        let current = profile.unlocked_level(game_key);
        if level > current {
            profile.game_progress.insert(game_key.to_string(), level);
        }
    }
}
