use chrono::{DateTime, Days, Local, NaiveDate, TimeZone};

use super::Period;
use crate::shared::Clock;

/// Truncate an instant to its local calendar day.
pub fn start_of_day<Tz: TimeZone>(instant: DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Two instants fall on the same day iff their local truncations are equal.
pub fn is_same_day<A: TimeZone, B: TimeZone>(a: DateTime<A>, b: DateTime<B>) -> bool {
    start_of_day(a) == start_of_day(b)
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Window arithmetic anchored on a single sampled "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    today: NaiveDate,
}

impl CalendarWindow {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Midnight `n` days before today; `days_ago(0)` is today.
    pub fn days_ago(&self, n: u32) -> NaiveDate {
        self.today
            .checked_sub_days(Days::new(u64::from(n)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Inclusive lower bound of the window, `None` for all time.
    pub fn lower_bound(&self, period: Period) -> Option<NaiveDate> {
        period.lookback_days().map(|n| self.days_ago(n))
    }

    /// Window membership test.
    ///
    /// `Daily` requires the exact day. The rolling windows only bound from
    /// below, so future-dated posts count wherever the inequality holds.
    pub fn contains(&self, date: NaiveDate, period: Period) -> bool {
        match period {
            Period::Daily => date == self.today,
            Period::Weekly | Period::Monthly => self
                .lower_bound(period)
                .map_or(true, |bound| date >= bound),
            Period::AllTime => true,
        }
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }
}
