use crate::group::{AuthorKey, AuthorResolver, Post};
use crate::shared::MemberId;

/// The member whose own activity is being inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    member_id: MemberId,
    display_name: Option<String>,
}

impl Viewer {
    pub fn new(member_id: MemberId) -> Self {
        Self {
            member_id,
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Whether the post is the viewer's under the group's author resolution.
    /// The viewer's own display name only claims names the roster leaves
    /// unlinked, and never a name several members share.
    pub fn authored(&self, post: &Post, resolver: &AuthorResolver<'_>) -> bool {
        match resolver.resolve(post.author()) {
            AuthorKey::Member(id) => id == self.member_id,
            AuthorKey::Name(name) => {
                !resolver.is_shared_name(&name) && self.display_name() == Some(name.as_str())
            }
            AuthorKey::Unknown => false,
        }
    }
}
