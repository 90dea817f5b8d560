//! Core data models for the budget planner
//!
//! This module contains the records held by the store (transactions,
//! categories, savings goals) and the value types they are built from.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{
    Category, CategoryValidationError, CATEGORY_PALETTE, DEFAULT_COLOR, DEFAULT_ICON,
    INCOME_CATEGORY_NAME,
};
pub use goal::{Goal, GoalValidationError};
pub use ids::{CategoryId, GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{MonthKey, PeriodParseError, ReportingPeriod};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
