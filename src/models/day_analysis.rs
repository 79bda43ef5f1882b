use super::{day_category::DayCategory, today_meeting::TodayMeeting, week_content::WeekContent};
use serde::{Deserialize, Serialize};

/// Notes collected on the board to prepare the status with the boss.
/// Supplied by the caller, never computed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossPreparationData {
    pub conceptual_thoughts: Vec<String>,
    pub meeting_selection: Vec<String>,
}

/// Result of a single `analyze_day` call.
#[derive(Debug, Clone, Serialize)]
pub struct DayAnalysis {
    pub free_hours: f64,
    pub day_category: DayCategory,
    pub today_meetings: Vec<TodayMeeting>,
    pub has_long_focus_slot: bool,
    pub recommended_tasks: Vec<String>,
    pub has_internal_status_upcoming: bool,
    pub has_product_review_upcoming: bool,
    pub has_sales_status_upcoming: bool,
    pub week_content: WeekContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boss_preparation_data: Option<BossPreparationData>,
}

impl DayAnalysis {
    pub fn has_any_important_meeting(&self) -> bool {
        self.has_internal_status_upcoming
            || self.has_product_review_upcoming
            || self.has_sales_status_upcoming
    }

    pub fn meeting_minutes(&self) -> i64 {
        self.today_meetings.iter().map(|m| m.duration_minutes).sum()
    }
}
