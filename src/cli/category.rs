//! Category CLI commands

use chrono::Local;
use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::category::{
    format_category_details, format_category_list, format_category_spend,
};
use crate::error::PlannerResult;
use crate::models::MonthKey;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories with this month's spending against budget
    List {
        /// Show the plain category table without spending
        #[arg(long)]
        plain: bool,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Monthly budget (e.g., "300" or "300.00")
        budget: String,
        /// Icon name (e.g., "fa-paw")
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> PlannerResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { plain } => {
            if plain {
                print!(
                    "{}",
                    format_category_list(&service.list()?, &settings.currency_symbol)
                );
            } else {
                let month = MonthKey::from_date(Local::now().date_naive());
                let rows = storage.with_state(|state| state.snapshot().category_spend(month))?;

                println!("Spending for {}\n", month.long_label());
                print!("{}", format_category_spend(&rows, &settings.currency_symbol));
            }
        }

        CategoryCommands::Add { name, budget, icon } => {
            let budget = parse_amount(&budget)?;
            let category = service.add(&name, budget, icon.as_deref())?;

            println!("Created category: {}", category.name);
            print!(
                "{}",
                format_category_details(&category, &settings.currency_symbol)
            );
        }

        CategoryCommands::Show { category } => {
            let category = service.find(&category)?;
            print!(
                "{}",
                format_category_details(&category, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
