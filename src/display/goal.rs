//! Goal display formatting
//!
//! The progress bar is drawn from the clamped percentage while the number
//! printed next to it is the real one, so an overfunded goal reads "150%"
//! with a full bar.

use super::report::{format_bar, format_date, format_days_left, format_money, truncate};
use crate::reports::GoalProgress;

/// Format goal progress as a list
pub fn format_goal_list(progress: &[GoalProgress], currency: &str, date_format: &str) -> String {
    if progress.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let mut output = String::new();
    for goal in progress {
        output.push_str(&format_goal_row(goal, currency, date_format));
        output.push('\n');
    }
    output
}

/// Format a single goal: name and deadline, then amounts and progress bar
pub fn format_goal_row(goal: &GoalProgress, currency: &str, date_format: &str) -> String {
    format!(
        "{:<24} {:<14} {}\n  {} / {}  {} {:.0}%",
        truncate(&goal.name, 24),
        format_date(goal.date, date_format),
        format_days_left(goal.days_left),
        format_money(goal.saved, currency),
        format_money(goal.target, currency),
        format_bar(goal.bar_percentage(), 100.0, 20),
        goal.percentage
    )
}
