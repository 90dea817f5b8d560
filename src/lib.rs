//! Budget planner - personal income, expense and savings-goal tracking
//!
//! This library provides the core functionality for the `planner` command-line
//! application: a record store of transactions, categories and goals, and a
//! reporting engine that derives monthly summaries, budget usage, trends and
//! rankings from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (transactions, categories, goals, months)
//! - `storage`: JSON record store
//! - `services`: Validated mutations of the record store
//! - `reports`: Read-only aggregation views
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_planner::config::paths::PlannerPaths;
//! use budget_planner::models::MonthKey;
//! use budget_planner::storage::Storage;
//!
//! let storage = Storage::open(PlannerPaths::new()?)?;
//! let summary = storage.with_state(|state| {
//!     state.snapshot().monthly_summary(MonthKey::current())
//! })?;
//! println!("{}", summary.format_terminal("$"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
