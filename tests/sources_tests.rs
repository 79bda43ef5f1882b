use dailybrief::config::{BoardConfig, Config};
use dailybrief::errors::AppError;
use dailybrief::sources::board_file::{FileBoard, clean_content};
use dailybrief::sources::calendar_file::FileCalendar;
use dailybrief::sources::sink::{OUTBOX_SEPARATOR, OutboxSink, ResultOnlySink};
use dailybrief::sources::{BoardSource, CalendarSource, MessageSink};
use dailybrief::utils::date::{end_of_work_week, rest_of_work_week_range, today_range, week_range};
use chrono::{NaiveDate, Weekday, Datelike};
use std::fs;
use std::path::PathBuf;

mod common;
use common::{BOARD_JSON, CALENDAR_JSON, dt, monday, temp_path};

fn board_config(file: &str, root_id: &str) -> BoardConfig {
    BoardConfig {
        board_file: file.to_string(),
        root_id: root_id.to_string(),
        root_label: "Key vectors".into(),
        conceptual_thoughts_label: "Conceptual thoughts".into(),
        meeting_selection_label: "Meeting selection".into(),
    }
}

// ---------------------------
// Date ranges
// ---------------------------

#[test]
fn test_end_of_work_week() {
    let expected = NaiveDate::from_ymd_opt(2026, 10, 23).expect("date");
    for offset in 0..5 {
        let d = monday() + chrono::TimeDelta::days(offset);
        assert_eq!(end_of_work_week(d), expected, "from {}", d);
    }

    // weekend rolls to the coming Friday
    let saturday = NaiveDate::from_ymd_opt(2026, 10, 24).expect("date");
    let sunday = NaiveDate::from_ymd_opt(2026, 10, 25).expect("date");
    let next_friday = NaiveDate::from_ymd_opt(2026, 10, 30).expect("date");
    assert_eq!(end_of_work_week(saturday), next_friday);
    assert_eq!(end_of_work_week(sunday), next_friday);
    assert_eq!(end_of_work_week(sunday).weekday(), Weekday::Fri);
}

#[test]
fn test_query_ranges() {
    assert_eq!(
        today_range(monday()),
        (dt("2026-10-19 00:00"), dt("2026-10-20 00:00"))
    );

    let thursday = NaiveDate::from_ymd_opt(2026, 10, 22).expect("date");
    assert_eq!(
        week_range(thursday),
        (dt("2026-10-19 00:00"), dt("2026-10-26 00:00"))
    );

    let (start, end) = rest_of_work_week_range(thursday);
    assert_eq!(start, dt("2026-10-22 00:00"));
    assert_eq!(end.format("%Y-%m-%d %H:%M:%S").to_string(), "2026-10-23 23:59:59");
}

// ---------------------------
// File calendar
// ---------------------------

#[test]
fn test_file_calendar_filters_by_range() {
    let path = temp_path("calendar_range", "json");
    fs::write(&path, CALENDAR_JSON).expect("write");
    let calendar = FileCalendar::new(&path);

    let (s, e) = today_range(monday());
    let today = calendar.fetch_events(s, e).expect("fetch");
    let titles: Vec<&str> = today.iter().map(|e| e.summary.as_str()).collect();
    assert_eq!(titles, vec!["Daily standup", "Design sync", "Company holiday"]);

    let (s, e) = week_range(monday());
    assert_eq!(calendar.fetch_events(s, e).expect("fetch").len(), 5);
}

#[test]
fn test_file_calendar_errors() {
    let missing = FileCalendar::new(temp_path("calendar_missing", "json"));
    let (s, e) = today_range(monday());
    assert!(matches!(missing.fetch_events(s, e), Err(AppError::Calendar(_))));

    let path = temp_path("calendar_garbage", "json");
    fs::write(&path, "{ not json").expect("write");
    let garbage = FileCalendar::new(&path);
    assert!(matches!(garbage.fetch_events(s, e), Err(AppError::Calendar(_))));
}

// ---------------------------
// File board
// ---------------------------

#[test]
fn test_clean_content() {
    assert_eq!(
        clean_content("<p><b>R&amp;D</b>&nbsp;budget &lt;2M&gt; &#43;10&#61;x</p>"),
        "R&D budget <2M> +10=x"
    );
    assert_eq!(clean_content("  plain  "), "plain");
    assert_eq!(clean_content("<br/>"), "");
}

#[test]
fn test_board_focus_areas_by_id() {
    let path = temp_path("board_by_id", "json");
    fs::write(&path, BOARD_JSON).expect("write");
    let board = FileBoard::new(&board_config(&path, "root"));

    let areas = board.fetch_focus_areas().expect("areas");
    assert_eq!(
        areas,
        vec!["Growth & retention", "Professional development", "Hiring"]
    );
}

#[test]
fn test_board_root_fallback_by_label() {
    let path = temp_path("board_by_label", "json");
    fs::write(&path, BOARD_JSON).expect("write");
    let board = FileBoard::new(&board_config(&path, "does-not-exist"));

    assert_eq!(board.fetch_focus_areas().expect("areas").len(), 3);
}

#[test]
fn test_board_without_root_fails() {
    let path = temp_path("board_no_root", "json");
    fs::write(&path, r#"[{"id": "x", "content": "Random"}]"#).expect("write");
    let board = FileBoard::new(&board_config(&path, "root"));

    assert!(matches!(board.fetch_focus_areas(), Err(AppError::Board(_))));
}

#[test]
fn test_board_preparation_notes() {
    let path = temp_path("board_notes", "json");
    fs::write(&path, BOARD_JSON).expect("write");
    let board = FileBoard::new(&board_config(&path, "root"));

    let notes = board.fetch_preparation_notes().expect("notes").expect("some notes");
    assert_eq!(notes.conceptual_thoughts, vec!["Platform over features"]);
    assert_eq!(notes.meeting_selection, vec!["Q4 roadmap"]);

    let bare = temp_path("board_no_notes", "json");
    fs::write(&bare, r#"[{"id": "root", "content": "Key vectors"}]"#).expect("write");
    let board = FileBoard::new(&board_config(&bare, "root"));
    assert!(board.fetch_preparation_notes().expect("notes").is_none());
}

// ---------------------------
// Outbox
// ---------------------------

#[test]
fn test_outbox_appends_messages() {
    let path = temp_path("outbox_append", "txt");
    let sink = OutboxSink::new(PathBuf::from(&path));

    assert!(sink.deliver("first").expect("deliver"));
    assert!(sink.deliver("second").expect("deliver"));

    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(content, format!("first{}second", OUTBOX_SEPARATOR));
}

#[test]
fn test_result_only_sink_reports_delivery() {
    assert!(ResultOnlySink.deliver("kept in the result").expect("deliver"));
}

// ---------------------------
// Config
// ---------------------------

#[test]
fn test_config_init_and_load() {
    let path = PathBuf::from(temp_path("config_init", "conf"));

    assert!(Config::init_at(&path).expect("init"));
    // never overwritten
    assert!(!Config::init_at(&path).expect("init again"));

    let cfg = Config::load(&path).expect("load");
    assert_eq!(cfg.board.root_label, "Key vectors");
    assert!(!cfg.calendar.today_only);
    assert!(cfg.messaging.outbox_file.is_none());
}

#[test]
fn test_config_missing_file() {
    let path = PathBuf::from(temp_path("config_missing", "conf"));
    assert!(matches!(Config::load(&path), Err(AppError::ConfigMissing(_))));
}

#[test]
fn test_config_validation() {
    let path = temp_path("config_invalid", "conf");
    fs::write(
        &path,
        "calendar:\n  events_file: ''\nboard:\n  board_file: board.json\n  root_label: ''\n",
    )
    .expect("write");

    match Config::load(&PathBuf::from(&path)) {
        Err(AppError::Config(msg)) => {
            assert!(msg.contains("calendar.events_file"));
            assert!(msg.contains("board.root_id or board.root_label"));
        }
        other => panic!("expected config error, got {:?}", other.map(|_| ())),
    }

    let broken = temp_path("config_broken", "conf");
    fs::write(&broken, "calendar: [").expect("write");
    assert!(matches!(Config::load(&PathBuf::from(&broken)), Err(AppError::Yaml(_))));
}
