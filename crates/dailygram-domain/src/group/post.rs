use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::comment::CommentThread;
use crate::shared::{MemberId, PostId};

/// Author linkage carried by a post.
///
/// Current data links posts by member id. Legacy payloads only carry the
/// author's display name, so both halves are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub member_id: Option<MemberId>,
    pub display_name: Option<String>,
}

impl AuthorRef {
    pub fn member(member_id: MemberId) -> Self {
        Self {
            member_id: Some(member_id),
            display_name: None,
        }
    }

    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            member_id: None,
            display_name: Some(display_name.into()),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Trimmed display name, `None` when absent or blank.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    author: AuthorRef,
    date: NaiveDate,
    caption: String,
    comments: CommentThread,
}

impl Post {
    pub fn new(id: PostId, author: AuthorRef, date: NaiveDate) -> Self {
        Self {
            id,
            author,
            date,
            caption: String::new(),
            comments: CommentThread::default(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_comments(mut self, comments: CommentThread) -> Self {
        self.comments = comments;
        self
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn author(&self) -> &AuthorRef {
        &self.author
    }

    /// Calendar day the post counts towards.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn comments(&self) -> &CommentThread {
        &self.comments
    }
}
