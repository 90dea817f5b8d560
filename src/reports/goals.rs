//! Savings goal progress

use chrono::{DateTime, Utc};

use crate::models::{Goal, GoalId, Money};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// How far a goal has come and how long is left
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub name: String,
    pub target: Money,
    pub saved: Money,
    pub date: chrono::NaiveDate,
    /// Saved as a share of target; not capped, can exceed 100
    pub percentage: f64,
    /// Whole days until the deadline, rounded up; zero or less once reached
    pub days_left: i64,
}

impl GoalProgress {
    /// Percentage capped at 100, for drawing a progress bar
    pub fn bar_percentage(&self) -> f64 {
        self.percentage.min(100.0)
    }

    /// The deadline has arrived
    pub fn is_completed(&self) -> bool {
        self.days_left <= 0
    }
}

/// Progress of `goal` as of `now`
///
/// The deadline is taken as midnight UTC at the start of the goal's date.
pub fn goal_progress(goal: &Goal, now: DateTime<Utc>) -> GoalProgress {
    let percentage = goal.saved.percent_of(goal.target).unwrap_or(0.0);

    let deadline = goal.date.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (deadline - now).num_milliseconds();
    let days_left = (millis as f64 / MILLIS_PER_DAY).ceil() as i64;

    GoalProgress {
        goal_id: goal.id,
        name: goal.name.clone(),
        target: goal.target,
        saved: goal.saved,
        date: goal.date,
        percentage,
        days_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn goal(target: i64, saved: i64, y: i32, m: u32, d: u32) -> Goal {
        Goal::new(
            "Holiday",
            Money::from_units(target),
            Money::from_units(saved),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_fully_saved_past_goal_is_completed() {
        let progress = goal_progress(&goal(500, 500, 2024, 1, 1), at(2024, 3, 15, 12));

        assert_eq!(progress.percentage, 100.0);
        assert!(progress.days_left <= 0);
        assert!(progress.is_completed());
    }

    #[test]
    fn test_percentage_unbounded_bar_clamped() {
        let progress = goal_progress(&goal(500, 750, 2030, 1, 1), at(2024, 3, 15, 12));

        assert_eq!(progress.percentage, 150.0);
        assert_eq!(progress.bar_percentage(), 100.0);
        assert!(!progress.is_completed());
    }

    #[test]
    fn test_days_left_rounds_up_partial_days() {
        let g = goal(1000, 250, 2024, 4, 1);

        let progress = goal_progress(&g, at(2024, 3, 30, 12));
        assert_eq!(progress.days_left, 2);
        assert_eq!(progress.percentage, 25.0);

        let progress = goal_progress(&g, at(2024, 3, 31, 0));
        assert_eq!(progress.days_left, 1);

        let progress = goal_progress(&g, at(2024, 4, 1, 6));
        assert_eq!(progress.days_left, 0);
        assert!(progress.is_completed());
    }
}
