use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CommentId, DomainError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    author_name: String,
    text: String,
    created_at: DateTime<Utc>,
    replies: Vec<Comment>,
}

impl Comment {
    pub fn new(
        id: CommentId,
        author_name: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            author_name: author_name.into(),
            text: text.trim().to_string(),
            created_at,
            replies: Vec::new(),
        })
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn replies(&self) -> &[Comment] {
        &self.replies
    }

    fn count(&self) -> usize {
        1 + self.replies.iter().map(Comment::count).sum::<usize>()
    }
}

/// Reply tree attached to a post. Newest entries sit first at every level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Most recent top-level comment, used for feed previews.
    pub fn latest(&self) -> Option<&Comment> {
        self.comments.first()
    }

    /// Comments at every depth.
    pub fn total_count(&self) -> usize {
        self.comments.iter().map(Comment::count).sum()
    }

    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        find_in(&self.comments, id)
    }

    /// Add a top-level comment, or a reply when `parent_id` is given.
    pub fn insert(
        &mut self,
        parent_id: Option<&CommentId>,
        comment: Comment,
    ) -> Result<(), DomainError> {
        let Some(parent_id) = parent_id else {
            self.comments.insert(0, comment);
            return Ok(());
        };

        match find_in_mut(&mut self.comments, parent_id) {
            Some(parent) => {
                parent.replies.insert(0, comment);
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Parent comment {} not found",
                parent_id
            ))),
        }
    }
}

fn find_in<'a>(nodes: &'a [Comment], id: &CommentId) -> Option<&'a Comment> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.replies, id) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut<'a>(nodes: &'a mut [Comment], id: &CommentId) -> Option<&'a mut Comment> {
    for node in nodes.iter_mut() {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_in_mut(&mut node.replies, id) {
            return Some(found);
        }
    }
    None
}
