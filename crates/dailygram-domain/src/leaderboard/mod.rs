mod builder;
mod row;
mod streak;


pub use builder::{build_leaderboard, LeaderboardBuilder, UNKNOWN_NAME};
pub use row::{Leaderboard, LeaderboardRow};
pub use streak::{current_streak, LEADERBOARD_STREAK_CAP_DAYS};
