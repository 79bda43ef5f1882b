use chrono::NaiveDateTime;
use dailybrief::core::calculator::normalizer::NormalizeMode;
use dailybrief::core::pipeline::Briefing;
use dailybrief::errors::{AppError, AppResult};
use dailybrief::models::calendar_event::CalendarEvent;
use dailybrief::models::day_analysis::BossPreparationData;
use dailybrief::sources::{BoardSource, CalendarSource, MessageSink};
use std::cell::RefCell;

mod common;
use common::{early, ev, monday, today_ev};

struct StaticCalendar(Vec<CalendarEvent>);

impl CalendarSource for StaticCalendar {
    fn fetch_events(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<CalendarEvent>> {
        Ok(self
            .0
            .iter()
            .filter(|e| e.overlaps(start, end))
            .cloned()
            .collect())
    }
}

struct BrokenCalendar;

impl CalendarSource for BrokenCalendar {
    fn fetch_events(&self, _: NaiveDateTime, _: NaiveDateTime) -> AppResult<Vec<CalendarEvent>> {
        Err(AppError::Calendar("401 Unauthorized".into()))
    }
}

struct StaticBoard {
    areas: Vec<String>,
    notes: Option<BossPreparationData>,
}

impl BoardSource for StaticBoard {
    fn fetch_focus_areas(&self) -> AppResult<Vec<String>> {
        Ok(self.areas.clone())
    }

    fn fetch_preparation_notes(&self) -> AppResult<Option<BossPreparationData>> {
        Ok(self.notes.clone())
    }
}

struct BrokenBoard;

impl BoardSource for BrokenBoard {
    fn fetch_focus_areas(&self) -> AppResult<Vec<String>> {
        Err(AppError::Board("timeout".into()))
    }
}

#[derive(Default)]
struct RecordingSink {
    sent: RefCell<Vec<String>>,
}

impl MessageSink for RecordingSink {
    fn deliver(&self, text: &str) -> AppResult<bool> {
        self.sent.borrow_mut().push(text.to_string());
        Ok(true)
    }
}

struct BrokenSink;

impl MessageSink for BrokenSink {
    fn deliver(&self, _: &str) -> AppResult<bool> {
        Err(AppError::Delivery("chat not found".into()))
    }
}

fn week_calendar() -> StaticCalendar {
    StaticCalendar(vec![
        today_ev("Standup", "10:00", "10:30"),
        today_ev("Design sync", "11:00", "12:00"),
        ev("Internal product status", "2026-10-21 15:00", "2026-10-21 16:00"),
        // previous week: outside the upcoming range
        ev("Borrowers: results, actions, run tasks", "2026-10-12 12:00", "2026-10-12 13:00"),
        // next week: outside the upcoming range
        ev("Product review weekly", "2026-10-26 12:00", "2026-10-26 13:00"),
    ])
}

fn board() -> StaticBoard {
    StaticBoard {
        areas: vec!["Growth".into(), "Professional development".into()],
        notes: Some(BossPreparationData {
            conceptual_thoughts: vec!["Platform over features".into()],
            meeting_selection: Vec::new(),
        }),
    }
}

#[test]
fn test_successful_run_delivers_message() {
    let calendar = week_calendar();
    let board = board();
    let sink = RecordingSink::default();
    let briefing = Briefing {
        calendar: &calendar,
        board: &board,
        sink: &sink,
        mode: NormalizeMode::TrustCaller,
    };

    let result = briefing.run(monday(), early(), true);

    assert!(result.success);
    assert!(result.delivered);
    assert!(result.warnings.is_empty());
    assert_eq!(sink.sent.borrow().as_slice(), &[result.message.clone()]);

    assert!(result.message.contains("Free hours: 6\n"));
    assert!(result.message.contains("Day type: FOCUSED"));
    assert!(result.message.contains("1. Prepare the status with the boss"));
    assert!(result.message.contains("—— Platform over features"));
    assert!(!result.message.contains("sales status"));
    assert!(!result.message.contains("product status"));
    assert!(result.message.ends_with("Big blocks:\n\n- Growth"));
}

#[test]
fn test_calendar_failure_degrades_to_empty_day() {
    let board = board();
    let sink = RecordingSink::default();
    let briefing = Briefing {
        calendar: &BrokenCalendar,
        board: &board,
        sink: &sink,
        mode: NormalizeMode::TrustCaller,
    };

    let result = briefing.run(monday(), early(), true);

    assert!(!result.success);
    assert!(result.delivered);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings, vec!["Calendar: 401 Unauthorized".to_string()]);
    assert!(result.message.contains("Free hours: 7.5"));
    assert!(!result.message.contains("Suggested tasks:"));
}

#[test]
fn test_board_failure_leaves_big_blocks_empty() {
    let calendar = week_calendar();
    let sink = RecordingSink::default();
    let briefing = Briefing {
        calendar: &calendar,
        board: &BrokenBoard,
        sink: &sink,
        mode: NormalizeMode::TrustCaller,
    };

    let result = briefing.run(monday(), early(), true);

    assert!(!result.success);
    assert_eq!(result.warnings, vec!["Board: timeout".to_string()]);
    assert!(result.message.ends_with("Big blocks:\n"));
    // no preparation notes: only the content line under the boss section
    assert!(!result.message.contains("Conceptual thoughts"));
    assert!(result.message.contains("— Content: pitch preparation"));
}

#[test]
fn test_delivery_failure_is_reported() {
    let calendar = week_calendar();
    let board = board();
    let briefing = Briefing {
        calendar: &calendar,
        board: &board,
        sink: &BrokenSink,
        mode: NormalizeMode::TrustCaller,
    };

    let result = briefing.run(monday(), early(), true);

    assert!(!result.success);
    assert!(!result.delivered);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings, vec!["Messaging: chat not found".to_string()]);
    assert!(result.message.starts_with("Good morning!"));
}

#[test]
fn test_dry_run_does_not_deliver() {
    let calendar = week_calendar();
    let board = board();
    let sink = RecordingSink::default();
    let briefing = Briefing {
        calendar: &calendar,
        board: &board,
        sink: &sink,
        mode: NormalizeMode::TrustCaller,
    };

    let result = briefing.run(monday(), early(), false);

    assert!(result.success);
    assert!(!result.delivered);
    assert!(sink.sent.borrow().is_empty());
}

#[test]
fn test_gather_uses_today_and_rest_of_week_ranges() {
    let calendar = week_calendar();
    let board = board();
    let sink = RecordingSink::default();
    let briefing = Briefing {
        calendar: &calendar,
        board: &board,
        sink: &sink,
        mode: NormalizeMode::TrustCaller,
    };

    let gathered = briefing.gather(monday());

    assert_eq!(gathered.today_events.len(), 2);
    assert_eq!(gathered.upcoming_events.len(), 3);
    assert_eq!(gathered.focus_areas.len(), 2);
    assert!(gathered.preparation.is_some());
    assert!(gathered.warnings.is_empty());
}
