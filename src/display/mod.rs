//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and report views for terminal
//! display: tables, progress bars and currency amounts.

pub mod category;
pub mod dashboard;
pub mod goal;
pub mod report;
pub mod transaction;

pub use category::{format_category_details, format_category_list, format_category_spend};
pub use dashboard::{format_dashboard, format_summary_cards};
pub use goal::{format_goal_list, format_goal_row};
pub use transaction::{
    format_recent_transactions, format_transaction_details, format_transaction_list,
    format_transaction_row, transaction_icon,
};
