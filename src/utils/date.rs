//! Date utilities: parsing, "today", calendar query ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

fn midnight(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

/// `[today 00:00, tomorrow 00:00)`
pub fn today_range(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = midnight(date);
    (start, start + TimeDelta::days(1))
}

/// Monday 00:00 of the week containing `date` up to the next Monday 00:00.
/// Query range for "all of this week", used by the `analyze` summary.
pub fn week_range(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let monday = date.week(Weekday::Mon).first_day();
    let start = midnight(monday);
    (start, start + TimeDelta::days(7))
}

/// Friday closing the current work week. Saturday looks six days ahead
/// and Sunday five, so the weekend points to the coming Friday.
pub fn end_of_work_week(date: NaiveDate) -> NaiveDate {
    let days_until_friday = match date.weekday() {
        Weekday::Sun => 5,
        Weekday::Sat => 6,
        wd => 4 - wd.num_days_from_monday() as i64,
    };
    date + TimeDelta::days(days_until_friday)
}

/// Today 00:00 through the end of the work week (Friday 23:59:59).
pub fn rest_of_work_week_range(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let friday = end_of_work_week(date);
    let end = friday.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN));
    (midnight(date), end)
}
