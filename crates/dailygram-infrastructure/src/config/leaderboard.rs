use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dailygram_domain::activity::ACTIVITY_STREAK_CAP_DAYS;
use dailygram_domain::leaderboard::{LeaderboardBuilder, LEADERBOARD_STREAK_CAP_DAYS, UNKNOWN_NAME};
use dailygram_domain::shared::DomainError;
use dailygram_domain::Period;

/// Tunables for leaderboard and activity computations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Window used when a caller does not name one
    pub default_period: Period,

    /// Longest streak a leaderboard row will report
    pub leaderboard_streak_cap_days: u32,

    /// Longest streak the personal activity summary will report
    pub activity_streak_cap_days: u32,

    /// Label for rows whose author carries neither an id nor a name
    pub unknown_name: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            default_period: Period::Weekly,
            leaderboard_streak_cap_days: LEADERBOARD_STREAK_CAP_DAYS,
            activity_streak_cap_days: ACTIVITY_STREAK_CAP_DAYS,
            unknown_name: UNKNOWN_NAME.to_string(),
        }
    }
}

impl LeaderboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global leaderboard configuration
    pub fn global() -> &'static Self {
        GLOBAL_LEADERBOARD_CONFIG.get_or_init(Self::default)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.leaderboard_streak_cap_days == 0 {
            return Err(DomainError::Configuration(
                "leaderboard_streak_cap_days must be at least 1".to_string(),
            ));
        }
        if self.activity_streak_cap_days == 0 {
            return Err(DomainError::Configuration(
                "activity_streak_cap_days must be at least 1".to_string(),
            ));
        }
        if self.unknown_name.trim().is_empty() {
            return Err(DomainError::Configuration(
                "unknown_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn builder(&self, today: NaiveDate) -> LeaderboardBuilder {
        LeaderboardBuilder::new(today)
            .with_streak_cap(self.leaderboard_streak_cap_days)
            .with_unknown_name(self.unknown_name.clone())
    }
}

static GLOBAL_LEADERBOARD_CONFIG: OnceLock<LeaderboardConfig> = OnceLock::new();
