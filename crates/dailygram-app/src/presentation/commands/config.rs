use crate::application::services::LogLevel;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use dailygram_infrastructure::config::LeaderboardConfig;

pub async fn get_log_level(state: &AppState) -> Result<String, CommandError> {
    Ok(state.services.config.get_log_level().as_str().to_string())
}

pub async fn set_log_level(state: &AppState, level: String) -> Result<(), CommandError> {
    let log_level = LogLevel::parse(&level).ok_or_else(|| {
        CommandError::validation(
            "Invalid log level. Must be one of: error, warn, info, debug, trace",
        )
    })?;

    state
        .services
        .config
        .set_log_level(log_level)
        .map_err(|e| CommandError::infrastructure(format!("Failed to save log level: {}", e)))
}

pub async fn get_leaderboard_config(state: &AppState) -> Result<LeaderboardConfig, CommandError> {
    Ok(state.services.config.leaderboard_config())
}

/// Persisted; queries pick it up on the next start.
pub async fn set_leaderboard_config(
    state: &AppState,
    config: LeaderboardConfig,
) -> Result<(), CommandError> {
    state
        .services
        .config
        .set_leaderboard_config(config)
        .map_err(CommandError::from)
}
