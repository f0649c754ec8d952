mod activity_dto;
mod leaderboard_dto;

pub use activity_dto::*;
pub use leaderboard_dto::*;
