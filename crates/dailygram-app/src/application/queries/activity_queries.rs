use log::info;
use std::sync::Arc;

use crate::application::dtos::{ActivitySummaryDto, FeedAccessDto};
use dailygram_domain::activity::{ActivitySummary, FeedGate, Viewer};
use dailygram_domain::group::GroupRepository;
use dailygram_domain::shared::{Clock, DomainError, GroupId, MemberId};
use dailygram_infrastructure::config::LeaderboardConfig;

pub struct ActivityQueries {
    groups: Arc<dyn GroupRepository>,
    clock: Arc<dyn Clock>,
    streak_cap_days: u32,
}

impl ActivityQueries {
    pub fn new(groups: Arc<dyn GroupRepository>, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(groups, clock, LeaderboardConfig::global())
    }

    pub fn with_config(
        groups: Arc<dyn GroupRepository>,
        clock: Arc<dyn Clock>,
        config: &LeaderboardConfig,
    ) -> Self {
        Self {
            groups,
            clock,
            streak_cap_days: config.activity_streak_cap_days,
        }
    }

    /// Personal activity across every group the member belongs to.
    ///
    /// Posts are linked to the member the same way the leaderboard links them.
    /// `display_name` additionally claims name-only posts the roster leaves
    /// unlinked.
    pub async fn get_activity_summary(
        &self,
        member_id: &str,
        display_name: Option<&str>,
    ) -> Result<ActivitySummaryDto, DomainError> {
        let viewer = build_viewer(member_id, display_name);
        let groups = self.groups.find_by_member(viewer.member_id()).await?;
        let today = self.clock.today();

        let summary = ActivitySummary::compute_with_cap(&groups, &viewer, today, self.streak_cap_days);

        info!(
            "[activity] get_activity_summary member_id={} groups={} streak={} week={} today={}",
            member_id, summary.group_count, summary.streak, summary.posts_this_week, summary.posted_today
        );

        Ok(ActivitySummaryDto::new(member_id, summary))
    }

    /// Whether the member may browse a group's feed today.
    pub async fn get_feed_access(
        &self,
        group_id: &str,
        member_id: &str,
        display_name: Option<&str>,
    ) -> Result<FeedAccessDto, DomainError> {
        let group = self
            .groups
            .find_by_id(&GroupId::from_string(group_id))
            .await?
            .ok_or_else(|| DomainError::GroupNotFound(format!("Group {} not found", group_id)))?;

        let viewer = build_viewer(member_id, display_name);
        let access = FeedGate::evaluate(&group, &viewer, self.clock.today());

        info!(
            "[activity] get_feed_access group_id={} member_id={} unlocked={}",
            group_id,
            member_id,
            access.is_unlocked()
        );

        Ok(FeedAccessDto {
            group_id: group_id.to_string(),
            member_id: member_id.to_string(),
            access,
            unlocked: access.is_unlocked(),
        })
    }
}

fn build_viewer(member_id: &str, display_name: Option<&str>) -> Viewer {
    let viewer = Viewer::new(MemberId::from_string(member_id));
    match display_name {
        Some(name) => viewer.with_display_name(name),
        None => viewer,
    }
}
