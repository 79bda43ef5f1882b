//! One briefing run: fetch, analyze, compose, deliver.
//!
//! Collaborator failures never abort the run. Each one becomes a warning and
//! the affected input falls back to an empty value.

use crate::core::calculator::normalizer::NormalizeMode;
use crate::core::compose::compose;
use crate::core::logic::Core;
use crate::errors::AppError;
use crate::models::agenda_result::AgendaResult;
use crate::models::calendar_event::CalendarEvent;
use crate::models::day_analysis::{BossPreparationData, DayAnalysis};
use crate::sources::{BoardSource, CalendarSource, MessageSink};
use crate::utils::date::{rest_of_work_week_range, today_range};
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};

pub struct Briefing<'a> {
    pub calendar: &'a dyn CalendarSource,
    pub board: &'a dyn BoardSource,
    pub sink: &'a dyn MessageSink,
    pub mode: NormalizeMode,
}

/// Inputs gathered from the collaborators
#[derive(Debug, Default)]
pub struct Gathered {
    pub today_events: Vec<CalendarEvent>,
    pub upcoming_events: Vec<CalendarEvent>,
    pub focus_areas: Vec<String>,
    pub preparation: Option<BossPreparationData>,
    pub warnings: Vec<String>,
}

impl Gathered {
    fn warn(&mut self, source: &str, err: AppError) {
        warn!("{} fetch failed: {}", source, err);
        self.warnings.push(format!("{}: {}", source, err));
    }
}

impl Briefing<'_> {
    /// Fetch calendar and board inputs, turning failures into warnings.
    pub fn gather(&self, today: NaiveDate) -> Gathered {
        let mut out = Gathered::default();

        let (day_start, day_end) = today_range(today);
        let (week_start, week_end) = rest_of_work_week_range(today);

        // a failed today fetch skips the upcoming one: one warning per source
        match self.calendar.fetch_events(day_start, day_end) {
            Ok(events) => {
                out.today_events = events;
                match self.calendar.fetch_events(week_start, week_end) {
                    Ok(events) => out.upcoming_events = events,
                    Err(e) => out.warn("Calendar", e),
                }
            }
            Err(e) => out.warn("Calendar", e),
        }

        match self.board.fetch_focus_areas() {
            Ok(areas) => {
                out.focus_areas = areas;
                match self.board.fetch_preparation_notes() {
                    Ok(notes) => out.preparation = notes,
                    Err(e) => out.warn("Board", e),
                }
            }
            Err(e) => out.warn("Board", e),
        }

        out
    }

    /// Analysis only, without composing or delivering.
    pub fn analyze(&self, today: NaiveDate, now: NaiveDateTime) -> (DayAnalysis, Gathered) {
        let gathered = self.gather(today);
        let analysis = Core::analyze_day(
            &gathered.today_events,
            today,
            now,
            gathered.preparation.clone(),
            Some(&gathered.upcoming_events),
            self.mode,
        );
        (analysis, gathered)
    }

    /// Full run. With `deliver == false` the message is composed only.
    pub fn run(&self, today: NaiveDate, now: NaiveDateTime, deliver: bool) -> AgendaResult {
        let (analysis, gathered) = self.analyze(today, now);
        let message = compose(&analysis, &gathered.focus_areas);
        let mut warnings = gathered.warnings;

        let delivered = if deliver {
            match self.sink.deliver(&message) {
                Ok(sent) => sent,
                Err(e) => {
                    warn!("Delivery failed: {}", e);
                    warnings.push(format!("Messaging: {}", e));
                    false
                }
            }
        } else {
            false
        };

        info!(
            "Briefing for {}: free={}h category={:?} delivered={} warnings={}",
            today,
            analysis.free_hours,
            analysis.day_category,
            delivered,
            warnings.len()
        );

        AgendaResult {
            success: warnings.is_empty() && (delivered || !deliver),
            message,
            delivered,
            warnings,
        }
    }
}
