use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A raw calendar event as delivered by the calendar source.
/// Recurring events are already expanded upstream, but may still carry the
/// date of the first occurrence instead of today's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub uid: String,
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    pub fn new(summary: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            uid: String::new(),
            summary: summary.to_string(),
            start,
            end,
            description: None,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// True when the event intersects the half-open range `[from, to)`.
    pub fn overlaps(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        self.start < to && self.end > from
    }
}
