#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::group::{AuthorRef, AuthorResolver, Group, Member, Post};
    use crate::shared::{GroupId, MemberId, PostId};
    use chrono::{Days, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn ago(n: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(n)).unwrap()
    }

    fn ann() -> Viewer {
        Viewer::new(MemberId::from_string("1")).with_display_name("Ann")
    }

    fn group(id: &str, posts: Vec<Post>) -> Group {
        Group::new(
            GroupId::from_string(id),
            format!("Group {}", id),
            vec![
                Member::new(MemberId::from_string("1"), "Ann"),
                Member::new(MemberId::from_string("2"), "Ben"),
            ],
            posts,
        )
        .unwrap()
    }

    fn by_id(id: &str, date: NaiveDate) -> Post {
        Post::new(PostId::new(), AuthorRef::member(MemberId::from_string(id)), date)
    }

    fn by_name(name: &str, date: NaiveDate) -> Post {
        Post::new(PostId::new(), AuthorRef::named(name), date)
    }

    fn roster() -> Vec<Member> {
        vec![
            Member::new(MemberId::from_string("1"), "Ann"),
            Member::new(MemberId::from_string("2"), "Ben"),
        ]
    }

    #[test]
    fn test_viewer_matches_id_before_name() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);
        let viewer = ann();
        assert!(viewer.authored(&by_id("1", today()), &resolver));
        assert!(viewer.authored(&by_name("Ann", today()), &resolver));
        assert!(!viewer.authored(&by_name("Ben", today()), &resolver));

        // An explicit id decides even if the carried name matches.
        let imposter = Post::new(
            PostId::new(),
            AuthorRef::member(MemberId::from_string("2")).with_display_name("Ann"),
            today(),
        );
        assert!(!viewer.authored(&imposter, &resolver));
    }

    #[test]
    fn test_roster_name_links_without_viewer_name() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);
        let viewer = Viewer::new(MemberId::from_string("1"));

        assert!(viewer.authored(&by_name("Ann", today()), &resolver));
        assert!(!viewer.authored(&by_name("Zed", today()), &resolver));
    }

    #[test]
    fn test_viewer_cannot_claim_another_members_name() {
        let members = roster();
        let resolver = AuthorResolver::new(&members);
        let viewer = Viewer::new(MemberId::from_string("1")).with_display_name("Ben");

        assert!(!viewer.authored(&by_name("Ben", today()), &resolver));
    }

    #[test]
    fn test_viewer_name_claims_only_unlinked_unshared_names() {
        let members = vec![
            Member::unnamed(MemberId::from_string("1")),
            Member::new(MemberId::from_string("2"), "Sam"),
            Member::new(MemberId::from_string("3"), "Sam"),
        ];
        let resolver = AuthorResolver::new(&members);

        let named = ann();
        let anonymous = Viewer::new(MemberId::from_string("1"));
        assert!(named.authored(&by_name("Ann", today()), &resolver));
        assert!(!anonymous.authored(&by_name("Ann", today()), &resolver));

        let sam = Viewer::new(MemberId::from_string("2")).with_display_name("Sam");
        assert!(!sam.authored(&by_name("Sam", today()), &resolver));
    }

    #[test]
    fn test_summary_spans_groups() {
        let groups = vec![
            group("a", vec![by_id("1", today()), by_id("2", today())]),
            group("b", vec![by_name("Ann", ago(1)), by_id("1", ago(8))]),
        ];
        let summary = ActivitySummary::compute(&groups, &ann(), today());

        assert_eq!(summary.streak, 2);
        assert_eq!(summary.posts_this_week, 2);
        assert!(summary.posted_today);
        assert_eq!(summary.group_count, 2);
    }

    #[test]
    fn test_summary_streak_uses_profile_cap() {
        let posts = (0..45).map(|n| by_id("1", ago(n))).collect();
        let groups = vec![group("a", posts)];

        let summary = ActivitySummary::compute(&groups, &ann(), today());
        assert_eq!(summary.streak, ACTIVITY_STREAK_CAP_DAYS);

        let summary = ActivitySummary::compute_with_cap(&groups, &ann(), today(), 365);
        assert_eq!(summary.streak, 45);
    }

    #[test]
    fn test_summary_for_idle_member() {
        let groups = vec![group("a", vec![by_id("2", today())])];
        let summary = ActivitySummary::compute(&groups, &ann(), today());

        assert_eq!(summary.streak, 0);
        assert_eq!(summary.posts_this_week, 0);
        assert!(!summary.posted_today);
    }

    #[test]
    fn test_feed_locked_until_viewer_posts_today() {
        let g = group("a", vec![by_id("2", today()), by_id("1", ago(1))]);
        assert_eq!(FeedGate::evaluate(&g, &ann(), today()), FeedAccess::Locked);

        let g = group("a", vec![by_id("2", today()), by_id("1", today())]);
        let access = FeedGate::evaluate(&g, &ann(), today());
        assert_eq!(access, FeedAccess::Unlocked);
        assert!(access.is_unlocked());
    }

    #[test]
    fn test_feed_gate_is_per_group() {
        let posted = group("a", vec![by_id("1", today())]);
        let other = group("b", vec![]);

        assert!(FeedGate::evaluate(&posted, &ann(), today()).is_unlocked());
        assert!(!FeedGate::evaluate(&other, &ann(), today()).is_unlocked());
    }
}
