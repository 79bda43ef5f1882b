//! Daily work window: fixed clock boundaries plus the "now" anchor.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Work day start (wall clock)
pub const WORK_START: NaiveTime = match NaiveTime::from_hms_opt(10, 0, 0) {
    Some(t) => t,
    None => panic!("invalid WORK_START"),
};

/// Work day end (wall clock)
pub const WORK_END: NaiveTime = match NaiveTime::from_hms_opt(18, 0, 0) {
    Some(t) => t,
    None => panic!("invalid WORK_END"),
};

/// Unpaid break subtracted from the available time, in hours
pub const BREAK_HOURS: f64 = 0.5;

/// Minimum length of an uninterrupted focus slot, in hours
pub const MIN_FOCUS_SLOT_HOURS: f64 = 2.0;

/// Work window for one analysis date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub work_start: NaiveDateTime,
    pub work_end: NaiveDateTime,
    pub effective_start: NaiveDateTime,
}

impl WorkWindow {
    /// Build the window for `today`. `now` only moves the effective start
    /// when it falls on the same calendar date.
    pub fn new(today: NaiveDate, now: NaiveDateTime) -> Self {
        let work_start = today.and_time(WORK_START);
        let work_end = today.and_time(WORK_END);

        let effective_start = if now.date() == today && now > work_start {
            now
        } else {
            work_start
        };

        Self {
            work_start,
            work_end,
            effective_start,
        }
    }

    /// True when nothing is left of the work day.
    pub fn is_empty(&self) -> bool {
        self.effective_start >= self.work_end
    }

    /// Remaining window length; zero when the window is empty.
    pub fn available(&self) -> TimeDelta {
        if self.is_empty() {
            TimeDelta::zero()
        } else {
            self.work_end - self.effective_start
        }
    }

    /// Clip `[start, end)` to the window. Returns None when nothing remains.
    pub fn clip(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let s = start.max(self.effective_start);
        let e = end.min(self.work_end);
        if s < e { Some((s, e)) } else { None }
    }
}

/// Convert a duration to fractional hours.
pub fn hours(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 / 3600.0
}

/// Convert a duration to fractional minutes.
pub fn minutes(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 / 60.0
}
