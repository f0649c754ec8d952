use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Period;
use crate::group::AuthorKey;
use crate::shared::GroupId;

/// One ranked member on a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub author: AuthorKey,
    pub name: String,
    /// Distinct calendar days with at least one post inside the window.
    pub active_days: u32,
    /// Posts inside the window.
    pub total_posts: u32,
    /// Current streak over the full history, independent of the window.
    pub streak: u32,
    /// Latest post date over the full history.
    pub last_post: Option<NaiveDate>,
}

impl LeaderboardRow {
    pub fn member_id(&self) -> String {
        self.author.flat_id()
    }

    /// Ranking tuple; `None` sorts below every date.
    pub fn sort_key(&self) -> (u32, u32, u32, Option<NaiveDate>) {
        (self.active_days, self.total_posts, self.streak, self.last_post)
    }

    /// Descending order on the ranking tuple.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other.sort_key().cmp(&self.sort_key())
    }
}

/// Ranked rows together with the window and day they were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub group_id: GroupId,
    pub period: Period,
    pub today: NaiveDate,
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    pub fn row_for(&self, author: &AuthorKey) -> Option<&LeaderboardRow> {
        self.rows.iter().find(|row| &row.author == author)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
