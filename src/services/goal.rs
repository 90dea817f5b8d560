//! Savings goal service

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Goal, GoalId, Money};
use crate::storage::Storage;

/// Service for savings goals
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a goal; without a date it is due on the first of next month
    pub fn add(
        &self,
        name: &str,
        target: Money,
        saved: Money,
        date: Option<NaiveDate>,
    ) -> PlannerResult<Goal> {
        let today = Local::now().date_naive();
        self.add_as_of(name, target, saved, date, today)
    }

    /// Like [`GoalService::add`], with "today" supplied by the caller
    pub fn add_as_of(
        &self,
        name: &str,
        target: Money,
        saved: Money,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> PlannerResult<Goal> {
        let date = date.unwrap_or_else(|| Goal::default_date(today));
        let goal = Goal::new(name.trim(), target, saved, date);

        goal.validate().map_err(|e| {
            warn!(name = %goal.name, error = %e, "rejected goal");
            PlannerError::Validation(e.to_string())
        })?;

        self.storage.update(|state| state.goals.push(goal.clone()))?;
        self.storage.save()?;

        info!(id = %goal.id, name = %goal.name, target = %goal.target, "added goal");
        Ok(goal)
    }

    pub fn get(&self, id: GoalId) -> PlannerResult<Option<Goal>> {
        self.storage
            .with_state(|state| state.goals.iter().find(|g| g.id == id).cloned())
    }

    /// Find a goal by name (case-insensitive) or ID string
    pub fn find(&self, identifier: &str) -> PlannerResult<Goal> {
        let lowered = identifier.trim().to_lowercase();
        let found = self.storage.with_state(|state| {
            state
                .goals
                .iter()
                .find(|g| g.name.to_lowercase() == lowered)
                .or_else(|| state.goals.iter().find(|g| g.id.matches_ref(identifier)))
                .cloned()
        })?;

        found.ok_or_else(|| PlannerError::goal_not_found(identifier))
    }

    /// All goals in stored order
    pub fn list(&self) -> PlannerResult<Vec<Goal>> {
        self.storage.goals()
    }
}
