//! CLI commands for reports
//!
//! Every report prints to the terminal, or is written as CSV with `--output`.
//! Month-scoped reports default to the selected reporting period.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::debug;

use super::{export_to_file, parse_month};
use crate::config::settings::Settings;
use crate::error::PlannerResult;
use crate::models::MonthKey;
use crate::reports::{
    CategoryBreakdownReport, CategorySpendReport, IncomeExpenseSplit, MonthlySummary,
    SeriesReport, TopExpensesReport,
};
use crate::services::PeriodService;
use crate::storage::Storage;

/// Options shared by the month-scoped reports
#[derive(Args, Debug, Clone, Default)]
pub struct MonthArgs {
    /// Month to report on (YYYY-MM), defaults to the selected period
    #[arg(short, long)]
    pub period: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses, balance and savings rate for a month
    Summary {
        #[command(flatten)]
        args: MonthArgs,
    },

    /// Income and expenses for the most recent active months
    Monthly {
        /// Number of months (defaults to the configured series length)
        #[arg(short, long)]
        months: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Month-by-month trend ending at the selected period
    #[command(alias = "trend")]
    Trends {
        /// Number of months (defaults to the configured trend span)
        #[arg(short, long)]
        span: Option<usize>,

        #[command(flatten)]
        args: MonthArgs,
    },

    /// Largest expenses of a month
    Top {
        /// Number of expenses to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[command(flatten)]
        args: MonthArgs,
    },

    /// Expenses grouped by category
    Breakdown {
        #[command(flatten)]
        args: MonthArgs,
    },

    /// Income against expenses as shares of their total
    Split {
        #[command(flatten)]
        args: MonthArgs,
    },

    /// Spending against each category budget
    #[command(alias = "budget")]
    Budgets {
        #[command(flatten)]
        args: MonthArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> PlannerResult<()> {
    let currency = settings.currency_symbol.as_str();
    let state = storage.state()?;
    let snapshot = state.snapshot();

    match cmd {
        ReportCommands::Summary { args } => {
            let month = resolve_month(storage, &args)?;
            let report = MonthlySummary::generate(snapshot.transactions, month);
            emit(
                args.output,
                "Summary",
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )
        }

        ReportCommands::Monthly { months, output } => {
            let report = SeriesReport::monthly(
                snapshot.transactions,
                months.unwrap_or(settings.series_months),
            );
            emit(
                output,
                "Monthly report",
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )
        }

        ReportCommands::Trends { span, args } => {
            let anchor = resolve_month(storage, &args)?;
            let report = SeriesReport::trend(
                snapshot.transactions,
                anchor,
                span.unwrap_or(settings.trend_span),
            );
            emit(
                args.output,
                "Trend report",
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )
        }

        ReportCommands::Top { limit, args } => {
            let month = resolve_month(storage, &args)?;
            let report = TopExpensesReport::generate(
                snapshot.transactions,
                snapshot.categories,
                month,
                limit.unwrap_or(settings.top_limit),
            );
            emit(
                args.output,
                "Top expenses",
                || report.format_terminal(currency, &settings.date_format),
                |w| report.export_csv(w),
            )
        }

        ReportCommands::Breakdown { args } => {
            let month = resolve_month(storage, &args)?;
            let report = CategoryBreakdownReport::generate(
                snapshot.transactions,
                snapshot.categories,
                month,
            );
            emit(
                args.output,
                "Category breakdown",
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )
        }

        ReportCommands::Split { args } => {
            let month = resolve_month(storage, &args)?;
            let report = IncomeExpenseSplit::generate(snapshot.transactions, month);
            emit(
                args.output,
                "Income/expense split",
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )
        }

        ReportCommands::Budgets { args } => {
            let month = resolve_month(storage, &args)?;
            let report =
                CategorySpendReport::generate(snapshot.transactions, snapshot.categories, month);
            emit(
                args.output,
                "Budget report",
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )
        }
    }
}

/// `--period` when given, else the persisted reporting period
fn resolve_month(storage: &Storage, args: &MonthArgs) -> PlannerResult<MonthKey> {
    let month = args.period.as_deref().map(parse_month).transpose()?;
    PeriodService::new(storage).resolve(month)
}

/// Print a report, or export it when an output path was given
fn emit(
    output: Option<PathBuf>,
    label: &str,
    terminal: impl FnOnce() -> String,
    csv: impl FnOnce(&mut BufWriter<File>) -> PlannerResult<()>,
) -> PlannerResult<()> {
    match output {
        Some(path) => {
            export_to_file(&path, csv)?;
            debug!(path = %path.display(), "exported report");
            println!("{} exported to: {}", label, path.display());
        }
        None => println!("{}", terminal()),
    }
    Ok(())
}
