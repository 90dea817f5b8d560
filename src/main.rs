use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_planner::cli::{
    handle_category_command, handle_dashboard, handle_goal_command, handle_period_command,
    handle_report_command, handle_transaction_command, CategoryCommands, GoalCommands,
    PeriodCommands, ReportCommands, TransactionCommands,
};
use budget_planner::config::{paths::PlannerPaths, settings::Settings};
use budget_planner::logging;
use budget_planner::models::Category;
use budget_planner::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "planner",
    version,
    about = "Track income, expenses, budgets and savings goals",
    long_about = "planner records income and expense transactions against budget \
                  categories, tracks savings goals and produces monthly summaries, \
                  trends and category breakdowns from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, starter categories and settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Summary cards, recent transactions and budgets for this month
    #[command(alias = "dash")]
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Reporting period navigation
    #[command(subcommand)]
    Period(PeriodCommands),

    /// Reports and CSV export
    #[command(subcommand)]
    Report(ReportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing planner at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;

            if created {
                println!("Initialization complete!");
                println!();
                println!("Default categories have been created:");
                for category in Category::defaults() {
                    println!("  - {}", category.name);
                }
                println!();
                println!("Run 'planner category list' to see them.");
            } else {
                println!("Already initialized; existing data left untouched.");
            }
        }
        Some(Commands::Config) => {
            println!("Planner Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data file:        {}", paths.state_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Exports:          {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Series months:   {}", settings.series_months);
            println!("  Trend span:      {}", settings.trend_span);
            println!("  Top expenses:    {}", settings.top_limit);
        }
        Some(Commands::Dashboard) => {
            let storage = Storage::open(paths)?;
            handle_dashboard(&storage, &settings)?;
        }
        Some(Commands::Txn(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Period(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_period_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("planner - income, expense and savings-goal tracker");
            println!();
            println!("Run 'planner --help' for usage information.");
            println!("Run 'planner dashboard' for this month at a glance.");
        }
    }

    Ok(())
}
