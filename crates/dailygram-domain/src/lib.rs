// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod activity;
pub mod calendar;
pub mod comment;
pub mod group;
pub mod leaderboard;
pub mod shared;

// Re-exports for convenience
pub use calendar::Period;
pub use shared::{DomainError, GroupId, MemberId, PostId};
