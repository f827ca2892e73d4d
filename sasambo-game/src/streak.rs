//! Daily login-streak evaluation.
use chrono::{Local, NaiveDateTime};

use crate::constants::STREAK_HISTORY_LEN;
use crate::profile::{StreakEntry, UserProfile};

/// Supplies "now" to streak evaluation. Calendar-day comparisons follow
/// whatever timezone policy the implementation applies before handing out
/// the naive timestamp; production uses the local wall clock.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Evaluate the streak for a session start.
///
/// Same calendar day as the last login leaves the streak untouched; a
/// login yesterday continues it; anything else (including a first-ever
/// login) resets it to 1. The history window is deduplicated for today,
/// appended, and truncated to the most recent [`STREAK_HISTORY_LEN`] days.
/// Repeated calls within one calendar day are stable after the first.
pub fn record_login(profile: &mut UserProfile, now: NaiveDateTime) {
    let today = now.date();
    match profile.last_login.map(|last| last.date()) {
        Some(last) if last == today => {}
        Some(last) if last.succ_opt() == Some(today) => profile.streak += 1,
        _ => profile.streak = 1,
    }
    profile.last_login = Some(now);

    profile.streak_history.retain(|entry| entry.date != today);
    profile.streak_history.push(StreakEntry {
        date: today,
        active: true,
    });
    while profile.streak_history.len() > STREAK_HISTORY_LEN {
        profile.streak_history.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Language;
    use chrono::{Days, NaiveDate};

    fn at(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(9, 30, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile::new("Tester", Language::Samawa).unwrap()
    }

    #[test]
    fn first_login_starts_streak_at_one() {
        let mut profile = profile();
        let today = day(2026, 3, 10);
        record_login(&mut profile, at(today));
        assert_eq!(profile.streak, 1);
        assert_eq!(profile.streak_history.len(), 1);
        assert_eq!(profile.streak_history[0].date, today);
        assert!(profile.streak_history[0].active);
    }

    #[test]
    fn consecutive_day_continues_streak() {
        let mut profile = profile();
        profile.streak = 4;
        profile.last_login = Some(at(day(2026, 3, 9)));
        record_login(&mut profile, at(day(2026, 3, 10)));
        assert_eq!(profile.streak, 5);
        assert_eq!(
            profile.streak_history.last().unwrap().date,
            day(2026, 3, 10)
        );
    }

    #[test]
    fn gap_resets_streak() {
        let mut profile = profile();
        profile.streak = 7;
        profile.last_login = Some(at(day(2026, 3, 7)));
        record_login(&mut profile, at(day(2026, 3, 10)));
        assert_eq!(profile.streak, 1);
    }

    #[test]
    fn same_day_call_is_stable() {
        let mut profile = profile();
        profile.streak = 2;
        profile.last_login = Some(at(day(2026, 3, 9)));
        record_login(&mut profile, at(day(2026, 3, 10)));
        let after_first = profile.clone();
        record_login(
            &mut profile,
            day(2026, 3, 10).and_hms_opt(22, 0, 0).unwrap(),
        );
        assert_eq!(profile.streak, after_first.streak);
        assert_eq!(profile.streak_history, after_first.streak_history);
    }

    #[test]
    fn history_window_is_bounded_and_unique() {
        let mut profile = profile();
        let start = day(2026, 1, 1);
        for offset in 0..30 {
            let date = start.checked_add_days(Days::new(offset)).unwrap();
            record_login(&mut profile, at(date));
        }
        assert_eq!(profile.streak, 30);
        assert_eq!(profile.streak_history.len(), 7);
        // Most recent seven days, oldest first.
        let expected_first = start.checked_add_days(Days::new(23)).unwrap();
        assert_eq!(profile.streak_history[0].date, expected_first);
        assert_eq!(
            profile.streak_history.last().unwrap().date,
            start.checked_add_days(Days::new(29)).unwrap()
        );
        let mut dates: Vec<NaiveDate> =
            profile.streak_history.iter().map(|entry| entry.date).collect();
        dates.dedup();
        assert_eq!(dates.len(), 7);
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let mut profile = profile();
        profile.streak = 1;
        profile.last_login = Some(at(day(2026, 1, 31)));
        record_login(&mut profile, at(day(2026, 2, 1)));
        assert_eq!(profile.streak, 2);
    }
}
