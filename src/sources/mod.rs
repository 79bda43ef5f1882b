//! Collaborator contracts consumed by the briefing pipeline, plus the
//! file-backed adapters shipped with the CLI.
//!
//! Network clients (CalDAV, board API, chat API) implement the same traits
//! outside this crate.

pub mod board_file;
pub mod calendar_file;
pub mod sink;

use crate::errors::AppResult;
use crate::models::calendar_event::CalendarEvent;
use crate::models::day_analysis::BossPreparationData;
use chrono::NaiveDateTime;

/// Fetches concrete event instances overlapping `[start, end)`.
pub trait CalendarSource {
    fn fetch_events(&self, start: NaiveDateTime, end: NaiveDateTime)
    -> AppResult<Vec<CalendarEvent>>;
}

/// Reads the focus board.
pub trait BoardSource {
    /// First-level labels under the designated root
    fn fetch_focus_areas(&self) -> AppResult<Vec<String>>;

    /// Preparation notes for the boss status; None when the board has none.
    fn fetch_preparation_notes(&self) -> AppResult<Option<BossPreparationData>> {
        Ok(None)
    }
}

/// Delivers the finished text. Delivery is not idempotent: a retry may
/// produce a duplicate.
pub trait MessageSink {
    fn deliver(&self, text: &str) -> AppResult<bool>;
}
