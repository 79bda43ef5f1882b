//! Free work-hours left today once meetings and the break are removed.

use crate::core::calculator::window::{BREAK_HOURS, WorkWindow, hours, minutes};
use crate::models::today_meeting::TodayMeeting;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

/// A closed-open occupied interval inside the work window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn minutes(&self) -> f64 {
        minutes(self.end - self.start)
    }
}

/// Clip meetings to the window and coalesce them.
/// Touching intervals (`start == running end`) are merged too.
pub fn merge_intervals(meetings: &[TodayMeeting], window: &WorkWindow) -> Vec<Interval> {
    if window.is_empty() {
        return Vec::new();
    }

    let mut clipped: Vec<Interval> = meetings
        .iter()
        .filter_map(|m| window.clip(m.start, m.end))
        .map(|(start, end)| Interval { start, end })
        .collect();
    clipped.sort_by_key(|i| i.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(clipped.len());
    for iv in clipped {
        match merged.last_mut() {
            Some(last) if iv.start <= last.end => {
                last.end = last.end.max(iv.end);
            }
            _ => merged.push(iv),
        }
    }

    merged
}

/// Total occupied hours inside the window
pub fn occupied_hours(merged: &[Interval]) -> f64 {
    merged.iter().map(Interval::minutes).sum::<f64>() / 60.0
}

/// Round to one decimal place, never below zero (and never `-0`).
pub fn round_hours(h: f64) -> f64 {
    let rounded = (h * 10.0).round() / 10.0;
    if rounded > 0.0 { rounded } else { 0.0 }
}

/// Free hours for `today`, given "now" captured once by the caller.
pub fn free_hours(meetings: &[TodayMeeting], today: NaiveDate, now: NaiveDateTime) -> f64 {
    let window = WorkWindow::new(today, now);

    if window.is_empty() {
        debug!("Work window already over at {}", now);
        return 0.0;
    }

    let available = hours(window.available());
    let merged = merge_intervals(meetings, &window);
    let occupied = occupied_hours(&merged);
    let free = available - BREAK_HOURS - occupied;

    debug!(
        "Free hours calc: effective_start={}, work_end={}, relevant={}/{}",
        window.effective_start,
        window.work_end,
        merged.len(),
        meetings.len()
    );
    debug!(
        "Free hours calc: available={:.1}, meetings={:.1}h, break={}, free={:.1}",
        available, occupied, BREAK_HOURS, free
    );

    round_hours(free)
}
