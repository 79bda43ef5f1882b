//! Projects raw calendar events onto today's meetings.
//!
//! Calendar servers return recurring instances with the DTSTART of the first
//! occurrence, so only the wall-clock hour/minute of each event is trusted and
//! re-applied to the analysis date.

use crate::core::calculator::window::minutes;
use crate::models::calendar_event::CalendarEvent;
use crate::models::today_meeting::TodayMeeting;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use log::{debug, warn};

/// Events lasting at least this long are all-day markers.
pub const ALL_DAY_THRESHOLD: TimeDelta = TimeDelta::hours(24);

/// Whether the normalizer re-filters events by date before re-anchoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalizeMode {
    /// The caller already passed only today's events (calendar range query).
    #[default]
    TrustCaller,
    /// Drop events whose raw span does not touch the analysis date.
    /// Recurring instances still carrying their first-occurrence date are
    /// dropped as well.
    TodayOnly,
}

/// All-day markers: 24h or longer, or both ends exactly on 00:00.
pub fn is_all_day(event: &CalendarEvent) -> bool {
    if event.duration() >= ALL_DAY_THRESHOLD {
        return true;
    }
    is_midnight(event.start) && is_midnight(event.end)
}

fn is_midnight(dt: NaiveDateTime) -> bool {
    dt.hour() == 0 && dt.minute() == 0
}

fn reanchor(today: NaiveDate, original: NaiveDateTime) -> NaiveDateTime {
    // hour/minute come from a valid NaiveDateTime, seconds are dropped
    let time = NaiveTime::from_hms_opt(original.hour(), original.minute(), 0)
        .unwrap_or(NaiveTime::MIN);
    today.and_time(time)
}

/// Build today's meetings from raw events, ordered by start.
///
/// Events with `end <= start` are malformed and skipped with a warning.
pub fn normalize(events: &[CalendarEvent], today: NaiveDate, mode: NormalizeMode) -> Vec<TodayMeeting> {
    let day_start = today.and_time(NaiveTime::MIN);
    let day_end = day_start + TimeDelta::days(1);

    let mut meetings: Vec<TodayMeeting> = Vec::with_capacity(events.len());

    for event in events {
        if event.end <= event.start {
            warn!(
                "Skipping malformed event '{}': end {} is not after start {}",
                event.summary, event.end, event.start
            );
            continue;
        }

        if mode == NormalizeMode::TodayOnly && !event.overlaps(day_start, day_end) {
            debug!("Skipping event outside {}: {}", today, event.summary);
            continue;
        }

        if is_all_day(event) {
            debug!("Ignoring all-day event: {}", event.summary);
            continue;
        }

        let start = reanchor(today, event.start);
        let mut end = reanchor(today, event.end);

        // overnight wrap
        if end <= start {
            end += TimeDelta::days(1);
        }

        let duration_minutes = minutes(end - start).round() as i64;

        debug!(
            "Today meeting: {} at {} ({}min)",
            event.summary, start, duration_minutes
        );

        meetings.push(TodayMeeting {
            summary: event.summary.clone(),
            start,
            end,
            duration_minutes,
        });
    }

    meetings.sort_by_key(|m| m.start);
    debug!("Found {} meetings for {}", meetings.len(), today);
    meetings
}
