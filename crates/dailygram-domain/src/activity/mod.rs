mod feed_gate;
mod summary;
mod viewer;

#[cfg(test)]
mod activity_test;

pub use feed_gate::{FeedAccess, FeedGate};
pub use summary::{ActivitySummary, ACTIVITY_STREAK_CAP_DAYS};
pub use viewer::Viewer;
