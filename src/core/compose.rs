//! Renders a day analysis into the outbound briefing text.

use crate::models::day_analysis::DayAnalysis;
use crate::utils::formatting::format_hours;

/// Focus area never listed under "Big blocks"
pub const EXCLUDED_FOCUS_AREA: &str = "Professional development";

/// Deterministic template assembly, lines joined with '\n'.
pub fn compose(analysis: &DayAnalysis, focus_areas: &[String]) -> String {
    let mut lines: Vec<String> = vec![
        "Good morning!".into(),
        "Here is the suggested plan for today, my friend.".into(),
        String::new(),
        format!("Free hours: {}", format_hours(analysis.free_hours)),
        String::new(),
        format!("Day type: {}", analysis.day_category.label()),
    ];

    if analysis.has_any_important_meeting() {
        push_tasks(&mut lines, analysis);
    }

    lines.push(String::new());
    lines.push("Big blocks:".into());
    lines.push(String::new());
    for area in focus_areas.iter().filter(|a| a.as_str() != EXCLUDED_FOCUS_AREA) {
        lines.push(format!("- {}", area));
    }

    lines.join("\n")
}

// Fixed priority: sales, boss status, product review.
fn push_tasks(lines: &mut Vec<String>, analysis: &DayAnalysis) {
    lines.push(String::new());
    lines.push("Suggested tasks:".into());
    lines.push(String::new());

    let mut counter = 1;

    if analysis.has_sales_status_upcoming {
        lines.push(format!("{}. Prepare the sales status:", counter));
        counter += 1;
        lines.push(String::new());
        lines.push("- Prepare an analysis of product metrics on user activity".into());
        lines.push("- Refresh the actions on the main sales vectors".into());
        lines.push(
            "- Gradually hand over to Anna: take part less, or lead without taking on a pile of points"
                .into(),
        );
        lines.push(String::new());
    }

    if analysis.has_internal_status_upcoming {
        lines.push(format!("{}. Prepare the status with the boss", counter));
        counter += 1;
        lines.push(String::new());
        lines.push(format!("— Content: {}", analysis.week_content.label()));
        lines.push(String::new());

        if let Some(prep) = &analysis.boss_preparation_data {
            if !prep.conceptual_thoughts.is_empty() {
                lines.push("— Conceptual thoughts:".into());
                for thought in &prep.conceptual_thoughts {
                    lines.push(format!("—— {}", thought));
                }
                lines.push(String::new());
            }

            if !prep.meeting_selection.is_empty() {
                lines.push("— Selection for the next meeting:".into());
                for item in &prep.meeting_selection {
                    lines.push(format!("—— {}", item));
                }
                lines.push(String::new());
            }
        }
    }

    if analysis.has_product_review_upcoming {
        lines.push(format!("{}. Prepare the product status", counter));
    }
}
