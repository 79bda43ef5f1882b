pub mod analyze;
pub mod brief;
pub mod config;
pub mod init;

use crate::config::Config;
use crate::core::calculator::normalizer::NormalizeMode;
use crate::errors::AppResult;
use crate::utils::{date, time};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Resolve the analysis date and the single "now" used for the whole run.
/// An explicit `--now` is read as a wall-clock time on the analysis date.
pub fn resolve_moment(
    date_arg: Option<&String>,
    now_arg: Option<&String>,
) -> AppResult<(NaiveDate, NaiveDateTime)> {
    let day = date::parse_optional_date(date_arg)?.unwrap_or_else(date::today);
    let now = match time::parse_optional_time(now_arg)? {
        Some(t) => day.and_time(t),
        None => Local::now().naive_local(),
    };
    Ok((day, now))
}

pub fn normalize_mode(cfg: &Config) -> NormalizeMode {
    if cfg.calendar.today_only {
        NormalizeMode::TodayOnly
    } else {
        NormalizeMode::TrustCaller
    }
}
