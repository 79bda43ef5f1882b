#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use dailybrief::models::calendar_event::CalendarEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn brief() -> Command {
    cargo_bin_cmd!("dailybrief")
}

/// Monday, ISO week 43
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

/// "YYYY-MM-DD HH:MM"
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

/// "HH:MM" on the test Monday
pub fn at(hm: &str) -> NaiveDateTime {
    dt(&format!("2026-10-19 {}", hm))
}

/// A "now" before the work day starts on the test Monday
pub fn early() -> NaiveDateTime {
    at("07:00")
}

pub fn ev(summary: &str, start: &str, end: &str) -> CalendarEvent {
    CalendarEvent::new(summary, dt(start), dt(end))
}

/// Event on the test Monday given as "HH:MM"
pub fn today_ev(summary: &str, start: &str, end: &str) -> CalendarEvent {
    CalendarEvent::new(summary, at(start), at(end))
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailybrief.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const CALENDAR_JSON: &str = r#"[
  {"uid": "1", "summary": "Daily standup", "start": "2026-10-19T10:00:00", "end": "2026-10-19T10:30:00"},
  {"uid": "2", "summary": "Design sync", "start": "2026-10-19T11:00:00", "end": "2026-10-19T12:00:00"},
  {"uid": "3", "summary": "Company holiday", "start": "2026-10-19T00:00:00", "end": "2026-10-20T00:00:00"},
  {"uid": "4", "summary": "Internal Product Status", "start": "2026-10-21T15:00:00", "end": "2026-10-21T16:00:00"},
  {"uid": "5", "summary": "Product Review Weekly", "start": "2026-10-23T12:00:00", "end": "2026-10-23T13:00:00"},
  {"uid": "6", "summary": "Borrowers: results, actions, run tasks", "start": "2026-10-12T12:00:00", "end": "2026-10-12T13:00:00"}
]"#;

pub const BOARD_JSON: &str = r#"[
  {"id": "root", "content": "<p>Key vectors</p>", "is_root": true},
  {"id": "a1", "content": "<p>Growth &amp; retention</p>", "parent_id": "root"},
  {"id": "a2", "content": "Professional development", "parent_id": "root"},
  {"id": "a3", "content": "Hiring", "parent_id": "root"},
  {"id": "b1", "content": "Pricing test", "parent_id": "a1"},
  {"id": "ct", "content": "Conceptual thoughts"},
  {"id": "ct1", "content": "Platform over features", "parent_id": "ct"},
  {"id": "ms", "content": "Meeting selection"},
  {"id": "ms1", "content": "Q4 roadmap", "parent_id": "ms"}
]"#;

/// Write calendar, board and config fixtures; returns the config path.
pub fn setup_files(name: &str, outbox: Option<&str>) -> String {
    let calendar = temp_path(&format!("{}_calendar", name), "json");
    let board = temp_path(&format!("{}_board", name), "json");
    let config = temp_path(&format!("{}_config", name), "conf");

    fs::write(&calendar, CALENDAR_JSON).expect("write calendar");
    fs::write(&board, BOARD_JSON).expect("write board");

    let mut yaml = format!(
        "calendar:\n  events_file: {}\nboard:\n  board_file: {}\n  root_id: root\n",
        calendar, board
    );
    if let Some(o) = outbox {
        yaml.push_str(&format!("messaging:\n  outbox_file: {}\n", o));
    }
    fs::write(&config, yaml).expect("write config");

    config
}
