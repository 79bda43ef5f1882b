use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Content theme for the boss status, alternating every ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekContent {
    PitchPreparation,
    NumbersAndGrowth,
}

impl WeekContent {
    /// Odd ISO weeks → pitch preparation, even ISO weeks → numbers and growth.
    pub fn for_date(date: NaiveDate) -> Self {
        if date.iso_week().week() % 2 == 1 {
            WeekContent::PitchPreparation
        } else {
            WeekContent::NumbersAndGrowth
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeekContent::PitchPreparation => "pitch preparation",
            WeekContent::NumbersAndGrowth => "numbers and growth",
        }
    }
}
