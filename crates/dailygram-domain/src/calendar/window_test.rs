#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::{Local, NaiveDate, TimeZone};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window() -> CalendarWindow {
        CalendarWindow::new(day(2026, 10, 15))
    }

    #[test]
    fn test_days_ago_zero_is_today() {
        assert_eq!(window().days_ago(0), day(2026, 10, 15));
        assert_eq!(window().days_ago(6), day(2026, 10, 9));
        assert_eq!(window().days_ago(29), day(2026, 9, 16));
    }

    #[test]
    fn test_days_ago_crosses_year_boundary() {
        let w = CalendarWindow::new(day(2026, 1, 2));
        assert_eq!(w.days_ago(3), day(2025, 12, 30));
    }

    #[test]
    fn test_daily_matches_only_today() {
        let w = window();
        assert!(w.contains(day(2026, 10, 15), Period::Daily));
        assert!(!w.contains(day(2026, 10, 14), Period::Daily));
        assert!(!w.contains(day(2026, 10, 16), Period::Daily));
    }

    #[test]
    fn test_weekly_lower_bound_is_inclusive() {
        let w = window();
        assert!(w.contains(w.days_ago(6), Period::Weekly));
        assert!(!w.contains(w.days_ago(7), Period::Weekly));
    }

    #[test]
    fn test_monthly_lower_bound_is_inclusive() {
        let w = window();
        assert!(w.contains(w.days_ago(29), Period::Monthly));
        assert!(!w.contains(w.days_ago(30), Period::Monthly));
    }

    #[test]
    fn test_future_dates_pass_rolling_windows() {
        let w = window();
        let tomorrow = day(2026, 10, 16);
        assert!(w.contains(tomorrow, Period::Weekly));
        assert!(w.contains(tomorrow, Period::Monthly));
        assert!(w.contains(tomorrow, Period::AllTime));
    }

    #[test]
    fn test_all_time_accepts_anything() {
        let w = window();
        assert!(w.contains(day(1999, 1, 1), Period::AllTime));
        assert_eq!(w.lower_bound(Period::AllTime), None);
    }

    #[test]
    fn test_period_parse_falls_back_to_all_time() {
        assert_eq!(Period::parse("daily"), Period::Daily);
        assert_eq!(Period::parse(" Weekly "), Period::Weekly);
        assert_eq!(Period::parse("MONTHLY"), Period::Monthly);
        assert_eq!(Period::parse("yearly"), Period::AllTime);
        assert_eq!(Period::parse(""), Period::AllTime);
    }

    #[test]
    fn test_period_deserialize_unknown_selector() {
        let period: Period = serde_json::from_str("\"fortnightly\"").unwrap();
        assert_eq!(period, Period::AllTime);
        let period: Period = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(period, Period::Monthly);
    }

    #[test]
    fn test_start_of_day_truncates_time() {
        let morning = Local.with_ymd_and_hms(2026, 10, 15, 0, 0, 1).unwrap();
        let night = Local.with_ymd_and_hms(2026, 10, 15, 23, 59, 59).unwrap();
        assert_eq!(start_of_day(morning), day(2026, 10, 15));
        assert!(is_same_day(morning, night));
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(day(2026, 10, 1), day(2026, 10, 15)), 14);
        assert_eq!(days_between(day(2026, 10, 15), day(2026, 10, 1)), -14);
    }
}
