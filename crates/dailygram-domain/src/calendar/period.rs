use serde::{Deserialize, Serialize};
use specta::Type;

/// Rolling window a leaderboard is scoped to.
///
/// Selectors outside `daily`/`weekly`/`monthly` mean "all time".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    #[default]
    Weekly,
    Monthly,
    #[serde(other)]
    AllTime,
}

impl Period {
    /// Parse a selector, mapping anything unrecognised to `AllTime`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Period::Daily,
            "weekly" => Period::Weekly,
            "monthly" => Period::Monthly,
            _ => Period::AllTime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::AllTime => "all_time",
        }
    }

    /// Days before today still inside the window, `None` when unbounded.
    pub fn lookback_days(&self) -> Option<u32> {
        match self {
            Period::Daily => Some(0),
            Period::Weekly => Some(6),
            Period::Monthly => Some(29),
            Period::AllTime => None,
        }
    }
}

impl From<&str> for Period {
    fn from(value: &str) -> Self {
        Period::parse(value)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
