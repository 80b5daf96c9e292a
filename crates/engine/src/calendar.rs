//! Working-day calendar arithmetic.
//!
//! Deadlines come in two families: calendar-day offsets (plain date
//! addition) and working-day offsets, which skip weekends and holidays.
//! The engine only talks to the [`WorkingCalendar`] trait so tests and
//! deployments can inject their own holiday schedule.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Injected business-calendar service.
pub trait WorkingCalendar {
    fn is_working_day(&self, date: NaiveDate) -> bool;

    /// The date of the `days`-th working day strictly after `start`.
    /// `days == 0` returns `start` unchanged.
    fn add_working_days(&self, start: NaiveDate, days: u32) -> NaiveDate {
        let mut current = start;
        let mut remaining = days;
        while remaining > 0 {
            current += Duration::days(1);
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }
        current
    }

    /// Number of working days in `(start, end]`. Zero when `end <= start`.
    fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if end <= start {
            return 0;
        }
        let mut count = 0;
        let mut current = start + Duration::days(1);
        while current <= end {
            if self.is_working_day(current) {
                count += 1;
            }
            current += Duration::days(1);
        }
        count
    }
}

/// Holiday-schedule-backed calendar.
///
/// Weekends are non-working unless listed as working-weekend overrides
/// (the production calendar moves some working days onto Saturdays around
/// public holidays).
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar {
    holidays: BTreeSet<NaiveDate>,
    working_weekends: BTreeSet<NaiveDate>,
}

impl BusinessCalendar {
    pub fn new(
        holidays: impl IntoIterator<Item = NaiveDate>,
        working_weekends: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
            working_weekends: working_weekends.into_iter().collect(),
        }
    }

    /// Calendar with no holidays: only weekends are non-working.
    pub fn weekends_only() -> Self {
        Self::default()
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl WorkingCalendar for BusinessCalendar {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        if self.working_weekends.contains(&date) {
            return true;
        }
        !Self::is_weekend(date) && !self.holidays.contains(&date)
    }
}
