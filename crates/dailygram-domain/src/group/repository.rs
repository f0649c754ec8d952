use async_trait::async_trait;

use super::Group;
use crate::shared::{DomainError, GroupId, MemberId};

/// Port through which the application layer obtains group snapshots.
///
/// Returned groups are owned copies; callers never observe later writes.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Save (upsert) a group keyed by its id.
    async fn save(&self, group: &Group) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &GroupId) -> Result<Option<Group>, DomainError>;

    /// Groups whose roster contains the member.
    async fn find_by_member(&self, member_id: &MemberId) -> Result<Vec<Group>, DomainError>;
}
