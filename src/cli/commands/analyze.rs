use super::{normalize_mode, resolve_moment};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::window::{BREAK_HOURS, WORK_END, WORK_START};
use crate::core::pipeline::Briefing;
use crate::errors::AppResult;
use crate::models::day_analysis::DayAnalysis;
use crate::models::day_category::DayCategory;
use crate::sources::CalendarSource;
use crate::sources::board_file::FileBoard;
use crate::sources::calendar_file::FileCalendar;
use crate::sources::sink::ConsoleSink;
use crate::ui::messages::{header, warning};
use crate::utils::date::week_range;
use crate::utils::formatting::{bold, format_hours, mins2readable, pad_right};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDate;
use log::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { date, now, json } = cmd {
        let (day, now) = resolve_moment(date.as_ref(), now.as_ref())?;

        let calendar = FileCalendar::new(cfg.events_path());
        let board = FileBoard::new(&cfg.board);
        let briefing = Briefing {
            calendar: &calendar,
            board: &board,
            sink: &ConsoleSink,
            mode: normalize_mode(cfg),
        };

        let (analysis, gathered) = briefing.analyze(day, now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print_analysis(&day, &analysis);

            let (week_start, week_end) = week_range(day);
            match calendar.fetch_events(week_start, week_end) {
                Ok(events) => println!("{} {}", pad_right("Week events:", 16), events.len()),
                // already reported by the gather step
                Err(e) => debug!("Week events unavailable: {}", e),
            }
        }

        for w in &gathered.warnings {
            warning(w);
        }
    }

    Ok(())
}

fn category_colour(cat: DayCategory) -> Colour {
    match cat {
        DayCategory::Focused => Colour::Green,
        DayCategory::SomeFocusTime => Colour::Yellow,
        DayCategory::NoFocus => Colour::Red,
    }
}

fn print_analysis(day: &NaiveDate, analysis: &DayAnalysis) {
    header(format!("Day analysis for {}", day.format("%A %Y-%m-%d")));

    println!(
        "{} {} - {} (break {}h)",
        pad_right("Work window:", 16),
        WORK_START.format("%H:%M"),
        WORK_END.format("%H:%M"),
        BREAK_HOURS
    );

    if analysis.today_meetings.is_empty() {
        println!("No meetings today.");
    } else {
        let mut table = Table::new(vec![
            Column {
                header: "START".into(),
                max_width: 6,
            },
            Column {
                header: "END".into(),
                max_width: 6,
            },
            Column {
                header: "DURATION".into(),
                max_width: 9,
            },
            Column {
                header: "MEETING".into(),
                max_width: 40,
            },
        ]);
        for m in &analysis.today_meetings {
            table.add_row(vec![
                m.start_str(),
                m.end_str(),
                mins2readable(m.duration_minutes, false, false),
                m.summary.clone(),
            ]);
        }
        println!();
        print!("{}", table.render());
        println!(
            "{} {}",
            pad_right("Meetings total:", 16),
            mins2readable(analysis.meeting_minutes(), false, true)
        );
    }

    println!();
    println!(
        "{} {}",
        pad_right("Free hours:", 16),
        bold(&format_hours(analysis.free_hours))
    );
    println!(
        "{} {}",
        pad_right("Focus slot:", 16),
        if analysis.has_long_focus_slot { "yes" } else { "no" }
    );
    println!(
        "{} {}",
        pad_right("Day type:", 16),
        category_colour(analysis.day_category)
            .bold()
            .paint(analysis.day_category.label())
    );
    println!(
        "{} {}",
        pad_right("Week content:", 16),
        analysis.week_content.label()
    );

    if !analysis.recommended_tasks.is_empty() {
        println!();
        println!("Recommended tasks:");
        for t in &analysis.recommended_tasks {
            println!("  - {}", t);
        }
    }
}
