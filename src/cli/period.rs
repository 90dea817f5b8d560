//! Reporting period CLI commands

use clap::Subcommand;

use super::parse_month;
use crate::error::PlannerResult;
use crate::services::PeriodService;
use crate::storage::Storage;

/// Period subcommands
#[derive(Subcommand)]
pub enum PeriodCommands {
    /// Show the selected reporting period
    Show,
    /// Move to the previous month
    Prev,
    /// Move to the next month
    Next,
    /// Select a specific month
    Set {
        /// Month (YYYY-MM)
        month: String,
    },
}

/// Handle a period command
pub fn handle_period_command(storage: &Storage, cmd: PeriodCommands) -> PlannerResult<()> {
    let service = PeriodService::new(storage);

    let period = match cmd {
        PeriodCommands::Show => service.show()?,
        PeriodCommands::Prev => service.prev()?,
        PeriodCommands::Next => service.next()?,
        PeriodCommands::Set { month } => service.set(parse_month(&month)?)?,
    };

    println!("Reporting period: {} ({})", period, period.key());
    Ok(())
}
