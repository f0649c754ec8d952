use std::collections::HashSet;

use chrono::{Days, NaiveDate};

/// Upper bound on the backward walk for the group leaderboard.
pub const LEADERBOARD_STREAK_CAP_DAYS: u32 = 365;

/// Consecutive posting days ending today.
///
/// Walks back from `today` one day at a time while `posted_days` contains the
/// day, stopping at the first gap or after `cap_days` steps. A missing post
/// today means a streak of zero even if yesterday was active.
pub fn current_streak(posted_days: &HashSet<NaiveDate>, today: NaiveDate, cap_days: u32) -> u32 {
    let mut streak = 0u32;

    for offset in 0..cap_days {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(offset))) else {
            break;
        };

        if posted_days.contains(&day) {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
