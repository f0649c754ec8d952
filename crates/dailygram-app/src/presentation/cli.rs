//! Command-line surface over the presentation commands.
//!
//! Every subcommand prints its result as JSON on stdout. Errors are printed
//! as a `CommandError` JSON object on stderr.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::ConfigService;
use crate::presentation::bootstrap::build_app_state;
use crate::presentation::commands::*;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use dailygram_domain::shared::{Clock, FixedClock, SystemClock};
use dailygram_domain::Period;
use dailygram_infrastructure::config::LeaderboardConfig;
use dailygram_infrastructure::persistence::InMemoryGroupRepository;

/// DailyGram leaderboard engine
#[derive(Parser, Debug)]
#[command(name = "dailygram")]
#[command(about = "Rank group members by posting consistency", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding app_config.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Compute as of this local date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ranked leaderboard for one group
    Leaderboard {
        /// Group snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        group: String,

        /// daily, weekly, monthly or all_time
        #[arg(long)]
        period: Option<String>,
    },

    /// A single member's leaderboard row
    MemberRow {
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        group: String,

        #[arg(long)]
        member: String,

        #[arg(long)]
        period: Option<String>,
    },

    /// A member's streak and weekly activity across their groups
    Activity {
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        member: String,

        /// Display name, to claim name-only posts the roster leaves unlinked
        #[arg(long)]
        name: Option<String>,
    },

    /// Whether a member has unlocked a group's feed today
    Feed {
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        group: String,

        #[arg(long)]
        member: String,

        #[arg(long)]
        name: Option<String>,
    },

    /// Show the log level, or persist a new one
    LogLevel {
        level: Option<String>,
    },

    /// Show the leaderboard settings, persisting any that are given
    Config {
        /// daily, weekly, monthly or all_time
        #[arg(long)]
        default_period: Option<String>,

        #[arg(long)]
        leaderboard_streak_cap: Option<u32>,

        #[arg(long)]
        activity_streak_cap: Option<u32>,

        /// Label for posts with neither an author id nor a name
        #[arg(long)]
        unknown_name: Option<String>,
    },
}

impl Cli {
    pub fn config_dir(&self) -> Result<PathBuf, CommandError> {
        self.config_dir
            .clone()
            .or_else(ConfigService::default_config_dir)
            .ok_or_else(|| CommandError::infrastructure("Failed to resolve config directory"))
    }

    fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(day) => Arc::new(FixedClock::new(day)),
            None => Arc::new(SystemClock),
        }
    }
}

/// Execute the parsed command and return the JSON to print.
pub async fn run(cli: Cli, config: Arc<ConfigService>) -> Result<String, CommandError> {
    let clock = cli.clock();
    let pretty = cli.pretty;

    match cli.command {
        Commands::Leaderboard {
            snapshot,
            group,
            period,
        } => {
            let state = build_app_state(&snapshot, config, clock).await?;
            render(&get_leaderboard(&state, group, period).await?, pretty)
        }
        Commands::MemberRow {
            snapshot,
            group,
            member,
            period,
        } => {
            let state = build_app_state(&snapshot, config, clock).await?;
            render(
                &get_member_leaderboard_row(&state, group, member, period).await?,
                pretty,
            )
        }
        Commands::Activity {
            snapshot,
            member,
            name,
        } => {
            let state = build_app_state(&snapshot, config, clock).await?;
            render(&get_activity_summary(&state, member, name).await?, pretty)
        }
        Commands::Feed {
            snapshot,
            group,
            member,
            name,
        } => {
            let state = build_app_state(&snapshot, config, clock).await?;
            render(&get_feed_access(&state, group, member, name).await?, pretty)
        }
        Commands::LogLevel { level } => {
            let state = empty_state(config, clock);
            if let Some(level) = level {
                set_log_level(&state, level).await?;
            }
            render(&get_log_level(&state).await?, pretty)
        }
        Commands::Config {
            default_period,
            leaderboard_streak_cap,
            activity_streak_cap,
            unknown_name,
        } => {
            let state = empty_state(config, clock);
            let current = get_leaderboard_config(&state).await?;
            let updated = LeaderboardConfig {
                default_period: default_period
                    .as_deref()
                    .map(Period::parse)
                    .unwrap_or(current.default_period),
                leaderboard_streak_cap_days: leaderboard_streak_cap
                    .unwrap_or(current.leaderboard_streak_cap_days),
                activity_streak_cap_days: activity_streak_cap
                    .unwrap_or(current.activity_streak_cap_days),
                unknown_name: unknown_name.unwrap_or_else(|| current.unknown_name.clone()),
            };
            if updated != current {
                set_leaderboard_config(&state, updated).await?;
            }
            render(&get_leaderboard_config(&state).await?, pretty)
        }
    }
}

fn empty_state(config: Arc<ConfigService>, clock: Arc<dyn Clock>) -> AppState {
    AppState::new(Arc::new(InMemoryGroupRepository::new()), clock, config)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, CommandError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
