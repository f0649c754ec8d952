use serde::{Deserialize, Serialize};
use specta::Type;

use dailygram_domain::leaderboard::{Leaderboard, LeaderboardRow};
use dailygram_domain::Period;

fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct LeaderboardRowDto {
    pub rank: u32,
    /// Roster id, `name:<display name>` for orphan posts, or `unknown:`
    pub member_id: String,
    pub name: String,
    pub active_days: u32,
    pub total_posts: u32,
    pub streak: u32,
    pub last_post: Option<String>,
}

impl From<&LeaderboardRow> for LeaderboardRowDto {
    fn from(row: &LeaderboardRow) -> Self {
        Self {
            rank: row.rank,
            member_id: row.member_id(),
            name: row.name.clone(),
            active_days: row.active_days,
            total_posts: row.total_posts,
            streak: row.streak,
            last_post: row.last_post.map(format_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct LeaderboardDto {
    pub group_id: String,
    pub group_name: String,
    pub period: Period,
    pub today: String,
    pub rows: Vec<LeaderboardRowDto>,
}

impl LeaderboardDto {
    pub fn new(group_name: impl Into<String>, board: &Leaderboard) -> Self {
        Self {
            group_id: board.group_id.as_str().to_string(),
            group_name: group_name.into(),
            period: board.period,
            today: format_date(board.today),
            rows: board.rows.iter().map(LeaderboardRowDto::from).collect(),
        }
    }
}
