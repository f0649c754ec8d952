use std::sync::Arc;

use crate::application::queries::{ActivityQueries, LeaderboardQueries};
use crate::application::services::ConfigService;
use dailygram_domain::group::GroupRepository;
use dailygram_domain::shared::Clock;

pub struct Services {
    pub config: Arc<ConfigService>,
}

pub struct Queries {
    pub leaderboard: Arc<LeaderboardQueries>,
    pub activity: Arc<ActivityQueries>,
}

pub struct AppState {
    pub groups: Arc<dyn GroupRepository>,
    pub clock: Arc<dyn Clock>,
    pub services: Services,
    pub queries: Queries,
}

impl AppState {
    /// Wire queries against `groups` using the leaderboard settings held by
    /// `config` at construction time.
    pub fn new(
        groups: Arc<dyn GroupRepository>,
        clock: Arc<dyn Clock>,
        config: Arc<ConfigService>,
    ) -> Self {
        let leaderboard_config = config.leaderboard_config();

        let queries = Queries {
            leaderboard: Arc::new(LeaderboardQueries::with_config(
                groups.clone(),
                clock.clone(),
                leaderboard_config.clone(),
            )),
            activity: Arc::new(ActivityQueries::with_config(
                groups.clone(),
                clock.clone(),
                &leaderboard_config,
            )),
        };

        Self {
            groups,
            clock,
            services: Services { config },
            queries,
        }
    }
}
