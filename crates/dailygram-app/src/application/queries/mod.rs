mod activity_queries;
mod leaderboard_queries;


pub use activity_queries::ActivityQueries;
pub use leaderboard_queries::LeaderboardQueries;
