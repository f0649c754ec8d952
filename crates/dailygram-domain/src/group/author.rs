use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use specta::Type;

use super::{AuthorRef, Member};
use crate::shared::MemberId;

/// Flat-id namespace for authors known only by display name.
pub const NAME_ID_PREFIX: &str = "name:";

/// Flat id for posts that carry neither id nor name.
pub const UNKNOWN_AUTHOR_ID: &str = "unknown:";

/// Resolved identity a post is bucketed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AuthorKey {
    Member(MemberId),
    Name(String),
    Unknown,
}

impl AuthorKey {
    pub fn member_id(&self) -> Option<&MemberId> {
        match self {
            AuthorKey::Member(id) => Some(id),
            _ => None,
        }
    }

    /// Flat identity string handed to the display layer. Name and unknown
    /// keys are namespaced so they never flatten onto a roster id.
    pub fn flat_id(&self) -> String {
        self.to_string()
    }

    /// Inverse of [`AuthorKey::flat_id`]. Anything outside the name and
    /// unknown namespaces is a member id.
    pub fn from_flat_id(value: &str) -> Self {
        if value == UNKNOWN_AUTHOR_ID {
            return AuthorKey::Unknown;
        }
        match value.strip_prefix(NAME_ID_PREFIX) {
            Some(name) if !name.is_empty() => AuthorKey::Name(name.to_string()),
            _ => AuthorKey::Member(MemberId::from_string(value)),
        }
    }
}

impl std::fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorKey::Member(id) => f.write_str(id.as_str()),
            AuthorKey::Name(name) => write!(f, "{}{}", NAME_ID_PREFIX, name),
            AuthorKey::Unknown => f.write_str(UNKNOWN_AUTHOR_ID),
        }
    }
}

/// Two-stage author resolution against a roster.
///
/// Stage one takes the post's member id as-is. Stage two runs only when the
/// post has no id and maps its display name onto the roster member carrying
/// that exact name. Names shared by several members stay unlinked.
pub struct AuthorResolver<'a> {
    by_id: HashMap<&'a MemberId, &'a Member>,
    by_name: HashMap<&'a str, Option<&'a MemberId>>,
}

impl<'a> AuthorResolver<'a> {
    pub fn new(members: &'a [Member]) -> Self {
        let mut by_id = HashMap::with_capacity(members.len());
        let mut by_name: HashMap<&'a str, Option<&'a MemberId>> = HashMap::new();

        for member in members {
            by_id.entry(member.id()).or_insert(member);
            if let Some(name) = member.display_name() {
                by_name
                    .entry(name)
                    .and_modify(|slot| {
                        if slot.is_some_and(|id| id != member.id()) {
                            *slot = None;
                        }
                    })
                    .or_insert(Some(member.id()));
            }
        }

        Self { by_id, by_name }
    }

    pub fn member(&self, id: &MemberId) -> Option<&'a Member> {
        self.by_id.get(id).copied()
    }

    /// True when several roster members carry this display name.
    pub fn is_shared_name(&self, name: &str) -> bool {
        matches!(self.by_name.get(name), Some(None))
    }

    pub fn resolve(&self, author: &AuthorRef) -> AuthorKey {
        if let Some(id) = &author.member_id {
            return AuthorKey::Member(id.clone());
        }

        match author.display_name() {
            Some(name) => match self.by_name.get(name) {
                Some(Some(id)) => AuthorKey::Member((*id).clone()),
                _ => AuthorKey::Name(name.to_string()),
            },
            None => AuthorKey::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Member> {
        vec![
            Member::new(MemberId::from_string("1"), "Ann"),
            Member::new(MemberId::from_string("2"), "Ben"),
            Member::new(MemberId::from_string("3"), "Sam"),
            Member::new(MemberId::from_string("4"), "Sam"),
        ]
    }

    #[test]
    fn test_member_id_wins_over_name() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);
        let author = AuthorRef::member(MemberId::from_string("2")).with_display_name("Ann");

        assert_eq!(
            resolver.resolve(&author),
            AuthorKey::Member(MemberId::from_string("2"))
        );
    }

    #[test]
    fn test_unknown_member_id_is_kept() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);
        let author = AuthorRef::member(MemberId::from_string("99"));

        assert_eq!(
            resolver.resolve(&author),
            AuthorKey::Member(MemberId::from_string("99"))
        );
        assert!(resolver.member(&MemberId::from_string("99")).is_none());
    }

    #[test]
    fn test_name_falls_back_to_roster_match() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);

        assert_eq!(
            resolver.resolve(&AuthorRef::named(" Ben ")),
            AuthorKey::Member(MemberId::from_string("2"))
        );
    }

    #[test]
    fn test_ambiguous_name_stays_unlinked() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);

        assert_eq!(
            resolver.resolve(&AuthorRef::named("Sam")),
            AuthorKey::Name("Sam".to_string())
        );
        assert!(resolver.is_shared_name("Sam"));
        assert!(!resolver.is_shared_name("Ann"));
        assert!(!resolver.is_shared_name("Zed"));
    }

    #[test]
    fn test_blank_author_is_unknown() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);

        assert_eq!(resolver.resolve(&AuthorRef::named("  ")), AuthorKey::Unknown);
        assert_eq!(resolver.resolve(&AuthorRef::default()), AuthorKey::Unknown);
        assert_eq!(AuthorKey::Unknown.flat_id(), UNKNOWN_AUTHOR_ID);
    }

    #[test]
    fn test_name_key_never_flattens_onto_member_id() {
        let member = AuthorKey::Member(MemberId::from_string("2"));
        let orphan = AuthorKey::Name("2".to_string());

        assert_eq!(member.flat_id(), "2");
        assert_eq!(orphan.flat_id(), "name:2");
        assert_eq!(AuthorKey::from_flat_id("2"), member);
        assert_eq!(AuthorKey::from_flat_id("name:2"), orphan);
        assert_eq!(AuthorKey::from_flat_id(UNKNOWN_AUTHOR_ID), AuthorKey::Unknown);
    }
}
