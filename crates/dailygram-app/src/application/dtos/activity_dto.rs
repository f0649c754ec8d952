use serde::{Deserialize, Serialize};
use specta::Type;

use dailygram_domain::activity::{ActivitySummary, FeedAccess};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct ActivitySummaryDto {
    pub member_id: String,
    pub streak: u32,
    pub posts_this_week: u32,
    pub posted_today: bool,
    pub group_count: u32,
}

impl ActivitySummaryDto {
    pub fn new(member_id: impl Into<String>, summary: ActivitySummary) -> Self {
        Self {
            member_id: member_id.into(),
            streak: summary.streak,
            posts_this_week: summary.posts_this_week,
            posted_today: summary.posted_today,
            group_count: summary.group_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct FeedAccessDto {
    pub group_id: String,
    pub member_id: String,
    pub access: FeedAccess,
    pub unlocked: bool,
}
