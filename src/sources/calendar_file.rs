use super::CalendarSource;
use crate::errors::{AppError, AppResult};
use crate::models::calendar_event::CalendarEvent;
use chrono::NaiveDateTime;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Calendar backed by a JSON export: an array of
/// `{uid, summary, start, end, description?}` with naive local date-times.
pub struct FileCalendar {
    path: PathBuf,
}

impl FileCalendar {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load_all(&self) -> AppResult<Vec<CalendarEvent>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Calendar(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Calendar(format!("invalid {}: {}", self.path.display(), e)))
    }
}

impl CalendarSource for FileCalendar {
    /// Same semantics as a CalDAV time-range query: every event intersecting
    /// the range is returned, nothing else is filtered.
    fn fetch_events(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<CalendarEvent>> {
        let events: Vec<CalendarEvent> = self
            .load_all()?
            .into_iter()
            .filter(|e| e.overlaps(start, end))
            .collect();

        debug!(
            "Calendar fetched {} events ({} to {})",
            events.len(),
            start,
            end
        );
        Ok(events)
    }
}
