//! Reports module for the budget planner
//!
//! Every view here is computed from scratch on each call from borrowed
//! records; nothing is cached and nothing is mutated. Empty inputs produce
//! empty or zero-valued results and a division by a zero total yields a zero
//! percentage, so none of these functions can fail.
//!
//! The `*Report` types wrap a view with terminal and CSV rendering.

pub mod budget;
pub mod expenses;
pub mod filter;
pub mod goals;
pub mod series;
pub mod summary;

pub use budget::{category_spend, CategorySpend, CategorySpendReport};
pub use expenses::{
    category_breakdown, top_expenses, BreakdownRow, CategoryBreakdownReport, TopExpenseRow,
    TopExpensesReport, UNKNOWN_CATEGORY,
};
pub use filter::{available_months, category_display_name, filter_transactions, TransactionFilter};
pub use goals::{goal_progress, GoalProgress};
pub use series::{monthly_series, trailing_trend, MonthlyTotals, SeriesReport};
pub use summary::{
    income_expense_split, monthly_summary, recent_transactions, BalanceTrend, IncomeExpenseSplit,
    MonthlySummary,
};

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::models::{Category, Goal, MonthKey, Transaction};

/// Read-only view of the record store handed to the reports
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub transactions: &'a [Transaction],
    pub categories: &'a [Category],
    pub goals: &'a [Goal],
}

impl<'a> Snapshot<'a> {
    pub fn new(
        transactions: &'a [Transaction],
        categories: &'a [Category],
        goals: &'a [Goal],
    ) -> Self {
        Self {
            transactions,
            categories,
            goals,
        }
    }

    pub fn monthly_summary(&self, month: MonthKey) -> MonthlySummary {
        monthly_summary(self.transactions, month)
    }

    pub fn recent_transactions(&self, n: usize) -> Vec<&'a Transaction> {
        recent_transactions(self.transactions, n)
    }

    pub fn filter_transactions(&self, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        filter_transactions(self.transactions, filter)
    }

    pub fn category_spend(&self, month: MonthKey) -> Vec<CategorySpend> {
        category_spend(self.transactions, self.categories, month)
    }

    pub fn monthly_series(&self, last_n: usize) -> Vec<MonthlyTotals> {
        monthly_series(self.transactions, last_n)
    }

    pub fn trailing_trend(&self, anchor: MonthKey, span: usize) -> Vec<MonthlyTotals> {
        trailing_trend(self.transactions, anchor, span)
    }

    pub fn top_expenses(&self, month: MonthKey, n: usize) -> Vec<&'a Transaction> {
        top_expenses(self.transactions, month, n)
    }

    pub fn category_breakdown(&self, month: MonthKey) -> Vec<BreakdownRow> {
        category_breakdown(self.transactions, self.categories, month)
    }

    pub fn income_expense_split(&self, month: MonthKey) -> IncomeExpenseSplit {
        income_expense_split(self.transactions, month)
    }

    pub fn available_months(&self) -> Vec<MonthKey> {
        available_months(self.transactions)
    }

    /// Progress for every goal, in stored order
    pub fn goal_progress(&self, now: DateTime<Utc>) -> Vec<GoalProgress> {
        self.goals.iter().map(|g| goal_progress(g, now)).collect()
    }

    pub fn category_display_name(&self, txn: &'a Transaction) -> &'a str {
        category_display_name(txn, self.categories)
    }
}

/// CSV writer shared by the report exports (LF line endings)
pub(crate) fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}
