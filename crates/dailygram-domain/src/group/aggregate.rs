use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Member, Post};
use crate::shared::{DomainError, GroupId, MemberId};

/// An accountability group: its roster plus every post made to it.
///
/// Post order carries no meaning; consumers re-sort as they need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    members: Vec<Member>,
    posts: Vec<Post>,
}

impl Group {
    pub fn new(
        id: GroupId,
        name: String,
        members: Vec<Member>,
        posts: Vec<Post>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Group name cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !seen.insert(member.id()) {
                return Err(DomainError::DataIntegrity(format!(
                    "Duplicate member id {} in group {}",
                    member.id(),
                    id
                )));
            }
        }

        Ok(Self {
            id,
            name,
            members,
            posts,
        })
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn posts_mut(&mut self) -> &mut [Post] {
        &mut self.posts
    }

    pub fn has_member(&self, member_id: &MemberId) -> bool {
        self.members.iter().any(|m| m.id() == member_id)
    }

    pub fn add_member(&mut self, member: Member) -> Result<(), DomainError> {
        if self.has_member(member.id()) {
            return Err(DomainError::DataIntegrity(format!(
                "Member {} already belongs to group {}",
                member.id(),
                self.id
            )));
        }
        self.members.push(member);
        Ok(())
    }

    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::AuthorRef;
    use crate::shared::PostId;
    use chrono::NaiveDate;

    fn members() -> Vec<Member> {
        vec![
            Member::new(MemberId::from_string("1"), "Ann"),
            Member::new(MemberId::from_string("2"), "Ben"),
        ]
    }

    #[test]
    fn test_new_group_rejects_blank_name() {
        let result = Group::new(GroupId::new(), "  ".to_string(), members(), vec![]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_new_group_rejects_duplicate_member_ids() {
        let mut roster = members();
        roster.push(Member::new(MemberId::from_string("1"), "Another Ann"));

        let result = Group::new(GroupId::new(), "Runners".to_string(), roster, vec![]);
        match result {
            Err(DomainError::DataIntegrity(msg)) => assert!(msg.contains("Duplicate member id 1")),
            _ => panic!("Expected DataIntegrity error"),
        }
    }

    #[test]
    fn test_add_member_and_post() {
        let mut group = Group::new(GroupId::new(), "Runners".to_string(), members(), vec![]).unwrap();

        group
            .add_member(Member::new(MemberId::from_string("3"), "Cat"))
            .unwrap();
        assert!(group.has_member(&MemberId::from_string("3")));
        assert!(group
            .add_member(Member::new(MemberId::from_string("3"), "Cat"))
            .is_err());

        group.add_post(Post::new(
            PostId::new(),
            AuthorRef::member(MemberId::from_string("3")),
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        ));
        assert_eq!(group.posts().len(), 1);
    }
}
