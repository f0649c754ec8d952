// Module declarations
pub mod activity;
pub mod config;
pub mod leaderboard;

// Re-export all commands for easy access
pub use activity::*;
pub use config::*;
pub use leaderboard::*;
