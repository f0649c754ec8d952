use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Viewer;
use crate::calendar::{CalendarWindow, Period};
use crate::group::{AuthorResolver, Group};
use crate::leaderboard::current_streak;

/// Cap on the cross-group streak shown on a member's own profile.
pub const ACTIVITY_STREAK_CAP_DAYS: u32 = 30;

/// A member's own posting activity across every group they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub streak: u32,
    pub posts_this_week: u32,
    pub posted_today: bool,
    pub group_count: u32,
}

impl ActivitySummary {
    pub fn compute(groups: &[Group], viewer: &Viewer, today: NaiveDate) -> Self {
        Self::compute_with_cap(groups, viewer, today, ACTIVITY_STREAK_CAP_DAYS)
    }

    pub fn compute_with_cap(
        groups: &[Group],
        viewer: &Viewer,
        today: NaiveDate,
        streak_cap_days: u32,
    ) -> Self {
        let window = CalendarWindow::new(today);
        let mut posted_days = HashSet::new();
        let mut posts_this_week = 0u32;

        for group in groups {
            let resolver = AuthorResolver::new(group.members());
            for post in group
                .posts()
                .iter()
                .filter(|post| viewer.authored(post, &resolver))
            {
                posted_days.insert(post.date());
                if window.contains(post.date(), Period::Weekly) {
                    posts_this_week += 1;
                }
            }
        }

        Self {
            streak: current_streak(&posted_days, today, streak_cap_days),
            posts_this_week,
            posted_today: posted_days.contains(&today),
            group_count: groups.len() as u32,
        }
    }
}
