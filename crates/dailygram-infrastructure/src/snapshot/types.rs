use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Ids arrive as strings from newer payloads and as integers from the
/// legacy REST API.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotDocument {
    Many { groups: Vec<GroupSnapshot> },
    One(GroupSnapshot),
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupSnapshot {
    pub id: RawId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberSnapshot>,
    #[serde(default)]
    pub posts: Vec<PostSnapshot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberSnapshot {
    pub id: RawId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostSnapshot {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub author_id: Option<RawId>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub comments: Vec<CommentSnapshot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentSnapshot {
    pub id: RawId,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub replies: Vec<CommentSnapshot>,
}
