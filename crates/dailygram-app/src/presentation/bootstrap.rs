use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::services::ConfigService;
use crate::application::ResultExt;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use dailygram_domain::group::GroupRepository;
use dailygram_domain::shared::Clock;
use dailygram_infrastructure::persistence::InMemoryGroupRepository;
use dailygram_infrastructure::snapshot::SnapshotLoader;

/// Load a group snapshot into a fresh repository and build the app state
/// around it.
pub async fn build_app_state(
    snapshot: &Path,
    config: Arc<ConfigService>,
    clock: Arc<dyn Clock>,
) -> Result<AppState, CommandError> {
    let started_at = Instant::now();

    let loader = SnapshotLoader::new(clock.today());
    let path: PathBuf = snapshot.to_path_buf();
    let groups = tokio::task::spawn_blocking(move || loader.load_path(&path))
        .await
        .to_infra_err()??;

    let group_count = groups.len();
    let repository: Arc<dyn GroupRepository> =
        Arc::new(InMemoryGroupRepository::with_groups(groups));

    info!(
        "✓ Loaded {} groups from {} ({}ms)",
        group_count,
        snapshot.display(),
        started_at.elapsed().as_millis()
    );

    Ok(AppState::new(repository, clock, config))
}
