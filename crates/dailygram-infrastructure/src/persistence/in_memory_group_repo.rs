use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use dailygram_domain::group::{Group, GroupRepository};
use dailygram_domain::shared::{DomainError, GroupId, MemberId};

/// Process-local implementation of GroupRepository.
///
/// Groups are cloned in and out, so a leaderboard computed from a fetched
/// group never races a concurrent `save`.
#[derive(Default)]
pub struct InMemoryGroupRepository {
    groups: RwLock<HashMap<GroupId, Group>>,
}

impl InMemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(groups: impl IntoIterator<Item = Group>) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| (group.id().clone(), group))
            .collect();
        Self {
            groups: RwLock::new(groups),
        }
    }

    pub async fn len(&self) -> usize {
        self.groups.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.groups.read().await.is_empty()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn save(&self, group: &Group) -> Result<(), DomainError> {
        self.groups
            .write()
            .await
            .insert(group.id().clone(), group.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &GroupId) -> Result<Option<Group>, DomainError> {
        Ok(self.groups.read().await.get(id).cloned())
    }

    async fn find_by_member(&self, member_id: &MemberId) -> Result<Vec<Group>, DomainError> {
        let mut groups: Vec<Group> = self
            .groups
            .read()
            .await
            .values()
            .filter(|group| group.has_member(member_id))
            .cloned()
            .collect();
        groups.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(groups)
    }
}
