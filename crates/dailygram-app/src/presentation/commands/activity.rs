use crate::application::dtos::{ActivitySummaryDto, FeedAccessDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub async fn get_activity_summary(
    state: &AppState,
    member_id: String,
    display_name: Option<String>,
) -> Result<ActivitySummaryDto, CommandError> {
    state
        .queries
        .activity
        .get_activity_summary(&member_id, display_name.as_deref())
        .await
        .map_err(CommandError::from)
}

pub async fn get_feed_access(
    state: &AppState,
    group_id: String,
    member_id: String,
    display_name: Option<String>,
) -> Result<FeedAccessDto, CommandError> {
    state
        .queries
        .activity
        .get_feed_access(&group_id, &member_id, display_name.as_deref())
        .await
        .map_err(CommandError::from)
}
