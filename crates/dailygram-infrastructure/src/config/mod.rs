mod leaderboard;

pub use leaderboard::LeaderboardConfig;
