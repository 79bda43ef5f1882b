pub mod agenda_result;
pub mod calendar_event;
pub mod day_analysis;
pub mod day_category;
pub mod today_meeting;
pub mod week_content;
