use crate::models::day_category::DayCategory;

/// Free hours from which the whole day counts as focused
pub const FOCUSED_MIN_HOURS: f64 = 6.0;

/// Free hours needed (together with a long slot) for some focus time
pub const SOME_FOCUS_MIN_HOURS: f64 = 3.0;

/// First matching threshold wins.
pub fn classify(free_hours: f64, has_long_focus_slot: bool) -> DayCategory {
    if free_hours >= FOCUSED_MIN_HOURS {
        DayCategory::Focused
    } else if free_hours >= SOME_FOCUS_MIN_HOURS && has_long_focus_slot {
        DayCategory::SomeFocusTime
    } else {
        DayCategory::NoFocus
    }
}
