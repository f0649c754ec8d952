use log::info;
use std::sync::Arc;

use crate::application::dtos::{LeaderboardDto, LeaderboardRowDto};
use dailygram_domain::group::{AuthorKey, Group, GroupRepository};
use dailygram_domain::leaderboard::Leaderboard;
use dailygram_domain::shared::{Clock, DomainError, GroupId};
use dailygram_domain::Period;
use dailygram_infrastructure::config::LeaderboardConfig;

pub struct LeaderboardQueries {
    groups: Arc<dyn GroupRepository>,
    clock: Arc<dyn Clock>,
    config: LeaderboardConfig,
}

impl LeaderboardQueries {
    pub fn new(groups: Arc<dyn GroupRepository>, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(groups, clock, LeaderboardConfig::global().clone())
    }

    pub fn with_config(
        groups: Arc<dyn GroupRepository>,
        clock: Arc<dyn Clock>,
        config: LeaderboardConfig,
    ) -> Self {
        Self {
            groups,
            clock,
            config,
        }
    }

    /// Ranked leaderboard for one group. `None` uses the configured default
    /// window.
    pub async fn get_leaderboard(
        &self,
        group_id: &str,
        period: Option<Period>,
    ) -> Result<LeaderboardDto, DomainError> {
        let (group, board) = self.build_board(group_id, period).await?;
        let dto = LeaderboardDto::new(group.name(), &board);

        info!(
            "[leaderboard] get_leaderboard group_id={} period={} today={} rows={}",
            dto.group_id,
            dto.period,
            dto.today,
            dto.rows.len()
        );

        Ok(dto)
    }

    /// The row a single member occupies on a group's leaderboard. Takes the
    /// flat id a row carries, so orphan rows are addressable as `name:<name>`.
    pub async fn get_member_row(
        &self,
        group_id: &str,
        member_id: &str,
        period: Option<Period>,
    ) -> Result<LeaderboardRowDto, DomainError> {
        let (_, board) = self.build_board(group_id, period).await?;
        let key = AuthorKey::from_flat_id(member_id);

        board
            .row_for(&key)
            .map(LeaderboardRowDto::from)
            .ok_or_else(|| {
                DomainError::MemberNotFound(format!(
                    "Member {} not on leaderboard for group {}",
                    member_id, group_id
                ))
            })
    }

    async fn build_board(
        &self,
        group_id: &str,
        period: Option<Period>,
    ) -> Result<(Group, Leaderboard), DomainError> {
        let group = self.load_group(group_id).await?;
        let period = period.unwrap_or(self.config.default_period);

        let board = self
            .config
            .builder(self.clock.today())
            .build(&group, period);
        Ok((group, board))
    }

    async fn load_group(&self, group_id: &str) -> Result<Group, DomainError> {
        self.groups
            .find_by_id(&GroupId::from_string(group_id))
            .await?
            .ok_or_else(|| DomainError::GroupNotFound(format!("Group {} not found", group_id)))
    }
}
