//! Savings goal model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::period::MonthKey;

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    pub name: String,

    /// Amount to reach; always positive
    pub target: Money,

    /// Amount saved so far; may exceed the target
    pub saved: Money,

    /// Target completion date
    pub date: NaiveDate,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Money, saved: Money, date: NaiveDate) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            saved,
            date,
        }
    }

    /// Amount still to save, never below zero
    pub fn remaining(&self) -> Money {
        if self.saved >= self.target {
            Money::zero()
        } else {
            self.target - self.saved
        }
    }

    /// Default deadline for a goal created on `today`: the first of next month
    pub fn default_date(today: NaiveDate) -> NaiveDate {
        MonthKey::new(today.year(), today.month0()).next().first_day()
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }

        if self.saved.is_negative() {
            return Err(GoalValidationError::NegativeSaved(self.saved));
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.name, self.saved, self.target)
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeSaved(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive, got {}", amount)
            }
            Self::NegativeSaved(amount) => {
                write!(f, "Saved amount cannot be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
