//! Flags recurring meetings that need preparation.
//!
//! No date filtering happens here: callers pass the events from today up to
//! the end of the work week. A past event passed in by mistake still matches.

use crate::models::calendar_event::CalendarEvent;
use log::debug;
use std::collections::BTreeSet;

/// Tracked meeting patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportantMeeting {
    InternalStatus,
    ProductReview,
    SalesStatus,
}

impl ImportantMeeting {
    pub const ALL: [ImportantMeeting; 3] = [
        ImportantMeeting::InternalStatus,
        ImportantMeeting::ProductReview,
        ImportantMeeting::SalesStatus,
    ];

    /// Lowercase title substring that identifies the meeting
    pub fn pattern(&self) -> &'static str {
        match self {
            ImportantMeeting::InternalStatus => "internal product status",
            ImportantMeeting::ProductReview => "product review weekly",
            ImportantMeeting::SalesStatus => "borrowers: results, actions, run tasks",
        }
    }
}

/// Case-insensitive substring scan over event titles.
pub fn scan(events: &[CalendarEvent]) -> BTreeSet<ImportantMeeting> {
    let mut found = BTreeSet::new();

    for event in events {
        let summary = event.summary.to_lowercase();
        for kind in ImportantMeeting::ALL {
            if summary.contains(kind.pattern()) {
                found.insert(kind);
            }
        }
    }

    debug!("Important meetings found (from today onwards): {:?}", found);
    found
}
