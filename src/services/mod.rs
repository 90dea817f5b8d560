//! Service layer for the budget planner
//!
//! Services own every mutation of the record store: they validate input,
//! keep the category snapshot on transactions current and save after each
//! change. The reporting engine only ever reads.

pub mod category;
pub mod goal;
pub mod period;
pub mod transaction;

pub use category::CategoryService;
pub use goal::GoalService;
pub use period::PeriodService;
pub use transaction::{NewTransaction, TransactionService};
