use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use log::debug;

use super::row::{Leaderboard, LeaderboardRow};
use super::streak::{current_streak, LEADERBOARD_STREAK_CAP_DAYS};
use crate::calendar::{CalendarWindow, Period};
use crate::group::{AuthorKey, AuthorResolver, Group, Post};
use crate::shared::Clock;

/// Display name for authors nobody could put a name to.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Posts attributed to one author, in input order.
struct AuthorBucket<'a> {
    key: AuthorKey,
    posts: Vec<&'a Post>,
}

/// Computes ranked per-member activity for a group.
///
/// The builder is pinned to one calendar day at construction, so every window
/// test and streak walk inside a build shares the same "today".
#[derive(Debug, Clone)]
pub struct LeaderboardBuilder {
    window: CalendarWindow,
    streak_cap_days: u32,
    unknown_name: String,
}

impl LeaderboardBuilder {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            window: CalendarWindow::new(today),
            streak_cap_days: LEADERBOARD_STREAK_CAP_DAYS,
            unknown_name: UNKNOWN_NAME.to_string(),
        }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    pub fn with_streak_cap(mut self, days: u32) -> Self {
        self.streak_cap_days = days;
        self
    }

    pub fn with_unknown_name(mut self, name: impl Into<String>) -> Self {
        self.unknown_name = name.into();
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.window.today()
    }

    pub fn build(&self, group: &Group, period: Period) -> Leaderboard {
        Leaderboard {
            group_id: group.id().clone(),
            period,
            today: self.window.today(),
            rows: self.rows(group, period),
        }
    }

    /// Ranked rows: one per roster member plus one per orphaned post author.
    pub fn rows(&self, group: &Group, period: Period) -> Vec<LeaderboardRow> {
        let resolver = AuthorResolver::new(group.members());
        let buckets = bucket_posts(group, &resolver);

        let mut rows: Vec<LeaderboardRow> = buckets
            .iter()
            .map(|bucket| self.row_for_bucket(bucket, &resolver, period))
            .collect();

        rows.sort_by(LeaderboardRow::ranking_cmp);
        for (index, row) in rows.iter_mut().enumerate() {
            row.rank = index as u32 + 1;
        }

        debug!(
            "[leaderboard] built group_id={} period={} today={} members={} posts={} rows={}",
            group.id(),
            period,
            self.window.today(),
            group.members().len(),
            group.posts().len(),
            rows.len()
        );

        rows
    }

    fn row_for_bucket(
        &self,
        bucket: &AuthorBucket<'_>,
        resolver: &AuthorResolver<'_>,
        period: Period,
    ) -> LeaderboardRow {
        let in_period: Vec<&Post> = bucket
            .posts
            .iter()
            .copied()
            .filter(|post| self.window.contains(post.date(), period))
            .collect();

        let active_days = in_period
            .iter()
            .map(|post| post.date())
            .collect::<HashSet<_>>()
            .len();

        let posted_days: HashSet<NaiveDate> = bucket.posts.iter().map(|post| post.date()).collect();
        let streak = current_streak(&posted_days, self.window.today(), self.streak_cap_days);
        let last_post = bucket.posts.iter().map(|post| post.date()).max();

        LeaderboardRow {
            rank: 0,
            author: bucket.key.clone(),
            name: self.resolve_name(bucket, resolver),
            active_days: active_days as u32,
            total_posts: in_period.len() as u32,
            streak,
            last_post,
        }
    }

    /// Roster name, then the name carried by the author's first post.
    fn resolve_name(&self, bucket: &AuthorBucket<'_>, resolver: &AuthorResolver<'_>) -> String {
        bucket
            .key
            .member_id()
            .and_then(|id| resolver.member(id))
            .and_then(|member| member.display_name())
            .or_else(|| {
                bucket
                    .posts
                    .first()
                    .and_then(|post| post.author().display_name())
            })
            .unwrap_or(self.unknown_name.as_str())
            .to_string()
    }
}

/// Bucket the full post history by resolved author, then make sure every
/// roster member owns a bucket. Buckets keep first-seen order so full ties
/// rank the same way on every call.
fn bucket_posts<'a>(group: &'a Group, resolver: &AuthorResolver<'_>) -> Vec<AuthorBucket<'a>> {
    let mut index: HashMap<AuthorKey, usize> = HashMap::new();
    let mut buckets: Vec<AuthorBucket<'a>> = Vec::new();

    for post in group.posts() {
        let key = resolver.resolve(post.author());
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            buckets.push(AuthorBucket {
                key,
                posts: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].posts.push(post);
    }

    for member in group.members() {
        let key = AuthorKey::Member(member.id().clone());
        if !index.contains_key(&key) {
            index.insert(key.clone(), buckets.len());
            buckets.push(AuthorBucket {
                key,
                posts: Vec::new(),
            });
        }
    }

    buckets
}

/// Convenience entry point: rank `group` for `period` as of `today`.
pub fn build_leaderboard(group: &Group, period: Period, today: NaiveDate) -> Vec<LeaderboardRow> {
    LeaderboardBuilder::new(today).rows(group, period)
}
