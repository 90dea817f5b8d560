//! Transaction CLI commands
//!
//! Implements CLI commands for recording, editing and listing transactions.

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_kind, parse_month};
use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, TransactionType, INCOME_CATEGORY_NAME};
use crate::reports::TransactionFilter;
use crate::services::{CategoryService, NewTransaction, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Amount (e.g., "40" or "40.50")
        amount: String,
        /// Category name or ID (income defaults to the Income category)
        #[arg(short, long)]
        category: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit a transaction; fields not given keep their current value
    Edit {
        /// Transaction ID
        id: String,
        /// New type (income or expense)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// List transactions, newest first
    List {
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// Filter by category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the most recent transactions
    Recent {
        /// Number of transactions to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> PlannerResult<()> {
    let service = TransactionService::new(storage);
    let category_service = CategoryService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let category = resolve_category(&category_service, kind, category.as_deref())?;

            let txn = service.add(NewTransaction {
                kind,
                amount,
                description: description.unwrap_or_default(),
                category_id: category.id,
                date,
            })?;

            println!("Recorded transaction: {}", txn.id);
            print!(
                "{}",
                format_transaction_details(
                    &txn,
                    &category_service.list()?,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let existing = service.find(&id)?;

            let kind = match kind {
                Some(k) => parse_kind(&k)?,
                None => existing.kind,
            };
            let amount = match amount {
                Some(a) => parse_amount(&a)?,
                None => existing.amount,
            };
            let category_id = match category {
                Some(c) => category_service.find(&c)?.id,
                None => existing.category_id,
            };
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => existing.date,
            };

            let txn = service.edit(
                existing.id,
                NewTransaction {
                    kind,
                    amount,
                    description: description.unwrap_or(existing.description),
                    category_id,
                    date,
                },
            )?;

            println!("Updated transaction: {}", txn.id);
            print!(
                "{}",
                format_transaction_details(
                    &txn,
                    &category_service.list()?,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = service.find(&id)?;
            service.delete(txn.id)?;
            println!("Deleted transaction: {}", txn.id);
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!(
                "{}",
                format_transaction_details(
                    &txn,
                    &category_service.list()?,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let mut filter = TransactionFilter::all();
            if let Some(k) = kind {
                filter = filter.with_kind(parse_kind(&k)?);
            }
            if let Some(c) = category {
                filter = filter.with_category(category_service.find(&c)?.id);
            }
            if let Some(m) = month {
                filter = filter.with_month(parse_month(&m)?);
            }

            let state = storage.state()?;
            let snapshot = state.snapshot();
            let mut transactions = snapshot.filter_transactions(&filter);
            let total = transactions.len();
            if let Some(n) = limit {
                transactions.truncate(n);
            }

            print!(
                "{}",
                format_transaction_list(
                    &transactions,
                    snapshot.categories,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
            println!("\nShowing {} of {} transactions", transactions.len(), total);
        }

        TransactionCommands::Recent { limit } => {
            let state = storage.state()?;
            let snapshot = state.snapshot();
            let recent = snapshot.recent_transactions(limit.unwrap_or(settings.recent_limit));

            print!(
                "{}",
                format_transaction_list(
                    &recent,
                    snapshot.categories,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}

/// Category for a new transaction: the one named, or "Income" for income
fn resolve_category(
    service: &CategoryService<'_>,
    kind: TransactionType,
    identifier: Option<&str>,
) -> PlannerResult<Category> {
    match (identifier, kind) {
        (Some(identifier), _) => service.find(identifier),
        (None, TransactionType::Income) => service.find(INCOME_CATEGORY_NAME),
        (None, TransactionType::Expense) => Err(PlannerError::Validation(
            "Expenses need a category (--category)".into(),
        )),
    }
}
