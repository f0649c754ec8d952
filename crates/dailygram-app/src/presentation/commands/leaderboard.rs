use crate::application::dtos::{LeaderboardDto, LeaderboardRowDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use dailygram_domain::Period;

/// Ranked leaderboard for a group. `period` accepts `daily`, `weekly`,
/// `monthly` or anything else for all time; `None` uses the configured
/// default.
pub async fn get_leaderboard(
    state: &AppState,
    group_id: String,
    period: Option<String>,
) -> Result<LeaderboardDto, CommandError> {
    let period = period.as_deref().map(Period::parse);
    state
        .queries
        .leaderboard
        .get_leaderboard(&group_id, period)
        .await
        .map_err(CommandError::from)
}

pub async fn get_member_leaderboard_row(
    state: &AppState,
    group_id: String,
    member_id: String,
    period: Option<String>,
) -> Result<LeaderboardRowDto, CommandError> {
    let period = period.as_deref().map(Period::parse);
    state
        .queries
        .leaderboard
        .get_member_row(&group_id, &member_id, period)
        .await
        .map_err(CommandError::from)
}
