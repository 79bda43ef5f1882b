//! Detects whether an uninterrupted focus block is still available today.

use crate::core::calculator::window::{WorkWindow, minutes};
use crate::models::today_meeting::TodayMeeting;
use chrono::{NaiveDate, NaiveDateTime};

/// True when a gap of at least `min_slot_hours` exists between meetings
/// (clipped to the work window), or when no meeting touches the window.
///
/// The no-meeting case does not compare the window length with
/// `min_slot_hours`: a late "now" with an empty calendar still reports a slot.
pub fn has_long_focus_slot(
    meetings: &[TodayMeeting],
    today: NaiveDate,
    now: NaiveDateTime,
    min_slot_hours: f64,
) -> bool {
    let window = WorkWindow::new(today, now);

    if window.is_empty() {
        return false;
    }

    let mut overlapping: Vec<&TodayMeeting> = meetings
        .iter()
        .filter(|m| m.start < window.work_end && m.end > window.effective_start)
        .collect();

    if overlapping.is_empty() {
        return true;
    }

    overlapping.sort_by_key(|m| m.start);

    let min_minutes = min_slot_hours * 60.0;
    let mut cursor = window.effective_start;

    for meeting in overlapping {
        let meeting_start = meeting.start.max(window.effective_start);

        if meeting_start > cursor && minutes(meeting_start - cursor) >= min_minutes {
            return true;
        }

        let meeting_end = meeting.end.min(window.work_end);
        if meeting_end > cursor {
            cursor = meeting_end;
        }
    }

    minutes(window.work_end - cursor) >= min_minutes
}
