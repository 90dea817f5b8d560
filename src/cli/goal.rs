//! Savings goal CLI commands

use chrono::Utc;
use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::goal::{format_goal_list, format_goal_row};
use crate::error::PlannerResult;
use crate::models::Money;
use crate::reports::goal_progress;
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List goals with progress and time left
    List,

    /// Create a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(short, long)]
        saved: Option<String>,
        /// Target date (YYYY-MM-DD), defaults to the first of next month
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> PlannerResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::List => {
            let now = Utc::now();
            let progress = storage.with_state(|state| state.snapshot().goal_progress(now))?;
            print!(
                "{}",
                format_goal_list(&progress, &settings.currency_symbol, &settings.date_format)
            );
        }

        GoalCommands::Add {
            name,
            target,
            saved,
            date,
        } => {
            let target = parse_amount(&target)?;
            let saved = match saved {
                Some(s) => parse_amount(&s)?,
                None => Money::zero(),
            };
            let date = date.as_deref().map(parse_date).transpose()?;

            let goal = service.add(&name, target, saved, date)?;

            println!("Created goal: {} ({})", goal.name, goal.id);
            println!(
                "{}",
                format_goal_row(
                    &goal_progress(&goal, Utc::now()),
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}
