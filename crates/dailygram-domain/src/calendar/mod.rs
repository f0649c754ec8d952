mod period;
mod window;

#[cfg(test)]
mod window_test;

pub use period::Period;
pub use window::{days_between, is_same_day, start_of_day, CalendarWindow};
