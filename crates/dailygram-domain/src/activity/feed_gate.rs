use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use specta::Type;

use super::Viewer;
use crate::calendar::CalendarWindow;
use crate::group::{AuthorResolver, Group};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum FeedAccess {
    Unlocked,
    Locked,
}

impl FeedAccess {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, FeedAccess::Unlocked)
    }
}

/// Daily unlock rule: a group's feed opens once the viewer has posted to
/// that group today.
pub struct FeedGate;

impl FeedGate {
    pub fn evaluate(group: &Group, viewer: &Viewer, today: NaiveDate) -> FeedAccess {
        let window = CalendarWindow::new(today);
        let resolver = AuthorResolver::new(group.members());
        let posted_today = group
            .posts()
            .iter()
            .any(|post| window.is_today(post.date()) && viewer.authored(post, &resolver));

        if posted_today {
            FeedAccess::Unlocked
        } else {
            FeedAccess::Locked
        }
    }
}
