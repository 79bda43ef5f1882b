use crate::core::calculator::important::{self, ImportantMeeting};
use crate::core::calculator::normalizer::{self, NormalizeMode};
use crate::core::calculator::window::MIN_FOCUS_SLOT_HOURS;
use crate::core::calculator::{category, focus, free_time};
use crate::models::calendar_event::CalendarEvent;
use crate::models::day_analysis::{BossPreparationData, DayAnalysis};
use crate::models::day_category::DayCategory;
use crate::models::week_content::WeekContent;
use chrono::{NaiveDate, NaiveDateTime};

pub const TASK_BOSS_STATUS: &str = "Prepare the status with the boss";
pub const TASK_PRODUCT_STATUS: &str = "Prepare the product status";

pub struct Core;

impl Core {
    /// Stateless day analysis. `now` must be captured once by the caller.
    ///
    /// Important meetings are searched in `upcoming_events` when given,
    /// otherwise in `today_events`.
    pub fn analyze_day(
        today_events: &[CalendarEvent],
        today: NaiveDate,
        now: NaiveDateTime,
        boss_preparation_data: Option<BossPreparationData>,
        upcoming_events: Option<&[CalendarEvent]>,
        mode: NormalizeMode,
    ) -> DayAnalysis {
        let today_meetings = normalizer::normalize(today_events, today, mode);
        let free_hours = free_time::free_hours(&today_meetings, today, now);
        let has_long_slot =
            focus::has_long_focus_slot(&today_meetings, today, now, MIN_FOCUS_SLOT_HOURS);
        let day_category = category::classify(free_hours, has_long_slot);

        let important = important::scan(upcoming_events.unwrap_or(today_events));
        let has_internal = important.contains(&ImportantMeeting::InternalStatus);
        let has_review = important.contains(&ImportantMeeting::ProductReview);
        let has_sales = important.contains(&ImportantMeeting::SalesStatus);

        DayAnalysis {
            free_hours,
            day_category,
            today_meetings,
            has_long_focus_slot: has_long_slot,
            recommended_tasks: Self::recommended_tasks(day_category, has_internal, has_review),
            has_internal_status_upcoming: has_internal,
            has_product_review_upcoming: has_review,
            has_sales_status_upcoming: has_sales,
            week_content: WeekContent::for_date(today),
            boss_preparation_data,
        }
    }

    /// No suggestions on a day without focus time.
    pub fn recommended_tasks(
        day_category: DayCategory,
        has_internal_status: bool,
        has_product_review: bool,
    ) -> Vec<String> {
        if day_category == DayCategory::NoFocus {
            return Vec::new();
        }

        let mut tasks = Vec::new();
        if has_internal_status {
            tasks.push(TASK_BOSS_STATUS.to_string());
        }
        if has_product_review {
            tasks.push(TASK_PRODUCT_STATUS.to_string());
        }
        tasks
    }
}
