use chrono::NaiveDateTime;
use serde::Serialize;

/// A timed meeting re-anchored onto the analysis date.
/// Invariant: `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayMeeting {
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

impl TodayMeeting {
    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}
