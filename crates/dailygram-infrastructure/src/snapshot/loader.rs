use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};

use dailygram_domain::calendar::start_of_day;
use dailygram_domain::comment::{Comment, CommentThread};
use dailygram_domain::group::{AuthorRef, Group, Member, Post};
use dailygram_domain::shared::{CommentId, DomainError, GroupId, MemberId, PostId};

use super::types::{CommentSnapshot, GroupSnapshot, PostSnapshot, SnapshotDocument};

/// Accepts either a calendar date (`2026-10-15`) or a full RFC 3339
/// timestamp, which is truncated to its local calendar day.
fn parse_date_flexible(value: &str) -> Result<NaiveDate, DomainError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(start_of_day)
        .map_err(|e| DomainError::Deserialization(format!("Invalid post date '{}': {}", value, e)))
}

/// Turns group payloads from the DailyGram web API into domain groups.
///
/// Missing post dates default to `today`, matching what the web client did
/// when it cached posts. Undecodable dates, duplicate roster entries and
/// blank comments are dropped with a warning rather than failing the load.
pub struct SnapshotLoader {
    today: NaiveDate,
}

impl SnapshotLoader {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn load_path(&self, path: &Path) -> Result<Vec<Group>, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Infrastructure(format!(
                "Failed to read snapshot {}: {}",
                path.display(),
                e
            ))
        })?;
        let groups = self.load_str(&content)?;

        info!(
            "[snapshot] loaded path={} groups={}",
            path.display(),
            groups.len()
        );
        Ok(groups)
    }

    pub fn load_str(&self, content: &str) -> Result<Vec<Group>, DomainError> {
        let document: SnapshotDocument = serde_json::from_str(content)
            .map_err(|e| DomainError::Deserialization(format!("Invalid snapshot JSON: {}", e)))?;

        let snapshots = match document {
            SnapshotDocument::Many { groups } => groups,
            SnapshotDocument::One(group) => vec![group],
        };

        snapshots
            .into_iter()
            .map(|snapshot| self.convert_group(snapshot))
            .collect()
    }

    fn convert_group(&self, snapshot: GroupSnapshot) -> Result<Group, DomainError> {
        let group_id = snapshot.id.into_string();
        let name = snapshot
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Group {}", group_id));

        let mut seen = HashSet::new();
        let mut members = Vec::with_capacity(snapshot.members.len());
        for member in snapshot.members {
            let id = member.id.into_string();
            if !seen.insert(id.clone()) {
                warn!(
                    "[snapshot] skip duplicate member group_id={} member_id={}",
                    group_id, id
                );
                continue;
            }
            let member_id = MemberId::from_string(&id);
            members.push(match member.name {
                Some(name) => Member::new(member_id, name),
                None => Member::unnamed(member_id),
            });
        }

        let mut posts = Vec::with_capacity(snapshot.posts.len());
        for post in snapshot.posts {
            if let Some(post) = self.convert_post(&group_id, post) {
                posts.push(post);
            }
        }

        Group::new(GroupId::from_string(&group_id), name, members, posts)
    }

    fn convert_post(&self, group_id: &str, snapshot: PostSnapshot) -> Option<Post> {
        let date = match snapshot.date.as_deref() {
            None => self.today,
            Some(raw) => match parse_date_flexible(raw) {
                Ok(date) => date,
                Err(e) => {
                    warn!("[snapshot] skip post group_id={} err={}", group_id, e);
                    return None;
                }
            },
        };

        let author = AuthorRef {
            member_id: snapshot
                .author_id
                .map(|id| MemberId::from_string(&id.into_string())),
            display_name: snapshot.user_name.or(snapshot.author),
        };

        let post_id = snapshot
            .id
            .map(|id| PostId::from_string(&id.into_string()))
            .unwrap_or_default();

        let fallback_time = date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        let mut thread = CommentThread::new();
        attach_comments(&mut thread, None, &snapshot.comments, fallback_time);

        Some(
            Post::new(post_id, author, date)
                .with_caption(snapshot.caption.unwrap_or_default())
                .with_comments(thread),
        )
    }
}

/// Rebuild a reply tree. Payloads list newest first and `insert` prepends,
/// so siblings are replayed oldest first.
fn attach_comments(
    thread: &mut CommentThread,
    parent: Option<&CommentId>,
    nodes: &[CommentSnapshot],
    fallback_time: Option<DateTime<Utc>>,
) {
    for node in nodes.iter().rev() {
        let author = node
            .user_name
            .clone()
            .or_else(|| node.author.clone())
            .unwrap_or_default();
        let created_at = node
            .created_at
            .or(fallback_time)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let id = CommentId::from_string(&node.id.clone().into_string());

        let comment = match Comment::new(id.clone(), author, node.text.clone(), created_at) {
            Ok(comment) => comment,
            Err(e) => {
                warn!("[snapshot] skip comment comment_id={} err={}", id, e);
                continue;
            }
        };

        if let Err(e) = thread.insert(parent, comment) {
            warn!("[snapshot] skip comment comment_id={} err={}", id, e);
            continue;
        }

        attach_comments(thread, Some(&id), &node.replies, fallback_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_parse_date_flexible() {
        assert_eq!(parse_date_flexible("2026-10-14").unwrap(), NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        assert!(parse_date_flexible("2026-10-14T12:00:00Z").is_ok());
        assert!(matches!(
            parse_date_flexible("yesterday"),
            Err(DomainError::Deserialization(_))
        ));
    }

    #[test]
    fn test_load_single_group_with_legacy_posts() {
        let json = r#"{
            "id": 7,
            "name": "Morning Runs",
            "members": [{"id": 1, "name": "Ann"}, {"id": 2}],
            "posts": [
                {"id": 10, "author_id": 1, "user_name": "Ann", "date": "2026-10-15"},
                {"id": 11, "author": "Zed", "date": "2026-10-14"},
                {"id": 12, "user_name": "Ann"},
                {"id": 13, "author_id": 2, "date": "not-a-date"}
            ]
        }"#;

        let groups = SnapshotLoader::new(today()).load_str(json).unwrap();
        assert_eq!(groups.len(), 1);

        let group = &groups[0];
        assert_eq!(group.id().as_str(), "7");
        assert_eq!(group.members().len(), 2);
        assert_eq!(group.members()[1].display_name(), None);
        assert_eq!(group.posts().len(), 3);

        let legacy = &group.posts()[1];
        assert_eq!(legacy.author().member_id, None);
        assert_eq!(legacy.author().display_name(), Some("Zed"));

        let undated = &group.posts()[2];
        assert_eq!(undated.date(), today());
    }

    #[test]
    fn test_duplicate_members_are_dropped() {
        let json = r#"{"id": "g", "name": "G", "members": [{"id": "1", "name": "Ann"}, {"id": 1, "name": "Ann again"}]}"#;
        let groups = SnapshotLoader::new(today()).load_str(json).unwrap();
        assert_eq!(groups[0].members().len(), 1);
        assert_eq!(groups[0].members()[0].display_name(), Some("Ann"));
    }

    #[test]
    fn test_missing_name_uses_group_id() {
        let groups = SnapshotLoader::new(today())
            .load_str(r#"{"groups": [{"id": 3}]}"#)
            .unwrap();
        assert_eq!(groups[0].name(), "Group 3");
    }

    #[test]
    fn test_comment_tree_keeps_payload_order() {
        let json = r#"{
            "id": 1, "name": "G",
            "posts": [{
                "id": 5, "author_id": 1, "date": "2026-10-15",
                "comments": [
                    {"id": 21, "user_name": "Ben", "text": "newest"},
                    {"id": 20, "user_name": "Cat", "text": "oldest",
                     "replies": [{"id": 22, "user_name": "Ann", "text": "reply"}]},
                    {"id": 23, "user_name": "Dan", "text": "   "}
                ]
            }]
        }"#;

        let groups = SnapshotLoader::new(today()).load_str(json).unwrap();
        let thread = groups[0].posts()[0].comments();

        assert_eq!(thread.total_count(), 3);
        assert_eq!(thread.latest().map(|c| c.text()), Some("newest"));
        let oldest = thread.find(&CommentId::from_string("20")).unwrap();
        assert_eq!(oldest.replies()[0].text(), "reply");
    }

    #[test]
    fn test_invalid_json_is_a_deserialization_error() {
        let result = SnapshotLoader::new(today()).load_str("{not json");
        assert!(matches!(result, Err(DomainError::Deserialization(_))));
    }
}
