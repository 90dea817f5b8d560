//! Configuration module for the budget planner
//!
//! This module provides:
//! - data directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
