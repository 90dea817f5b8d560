//! Month-by-month income and expense series
//!
//! Two views share the same row type. [`monthly_series`] only has rows for
//! months that contain transactions and keeps the most recent ones, while
//! [`trailing_trend`] walks a fixed window back from an anchor month and
//! emits a row for every month, active or not.

use std::collections::BTreeMap;
use std::io::Write;

use super::csv_writer;
use crate::display::report::{format_money, separator};
use crate::error::PlannerResult;
use crate::models::{Money, MonthKey, Transaction, TransactionType};

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyTotals {
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            income: Money::zero(),
            expenses: Money::zero(),
        }
    }

    /// Totals over the transactions dated in `month`
    pub fn for_month(transactions: &[Transaction], month: MonthKey) -> Self {
        let mut totals = Self::empty(month);
        for txn in transactions.iter().filter(|t| t.in_month(month)) {
            totals.record(txn);
        }
        totals
    }

    /// Income minus expenses; negative when the month overspent
    pub fn balance(&self) -> Money {
        self.income - self.expenses
    }

    fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionType::Income => self.income += txn.amount,
            TransactionType::Expense => self.expenses += txn.amount,
        }
    }
}

/// The last `last_n` months that have any activity, oldest first
///
/// Months without transactions are skipped, so the result can be shorter than
/// `last_n` and need not be contiguous.
pub fn monthly_series(transactions: &[Transaction], last_n: usize) -> Vec<MonthlyTotals> {
    let mut buckets: BTreeMap<MonthKey, MonthlyTotals> = BTreeMap::new();

    for txn in transactions {
        let month = txn.month();
        buckets
            .entry(month)
            .or_insert_with(|| MonthlyTotals::empty(month))
            .record(txn);
    }

    let skip = buckets.len().saturating_sub(last_n);
    buckets.into_values().skip(skip).collect()
}

/// One row per month for the `span` months ending at `anchor`, oldest first
pub fn trailing_trend(
    transactions: &[Transaction],
    anchor: MonthKey,
    span: usize,
) -> Vec<MonthlyTotals> {
    let mut trend: Vec<MonthlyTotals> = (0..span)
        .map(|back| MonthlyTotals::for_month(transactions, anchor.shift(-(back as i64))))
        .collect();
    trend.reverse();
    trend
}

/// Rendered form of either series
#[derive(Debug, Clone)]
pub struct SeriesReport {
    pub title: String,
    pub months: Vec<MonthlyTotals>,
}

impl SeriesReport {
    /// Recent active months, as charted on the dashboard
    pub fn monthly(transactions: &[Transaction], last_n: usize) -> Self {
        Self {
            title: format!("Income vs Expenses (last {} active months)", last_n),
            months: monthly_series(transactions, last_n),
        }
    }

    /// Every month in the window ending at `anchor`
    pub fn trend(transactions: &[Transaction], anchor: MonthKey, span: usize) -> Self {
        Self {
            title: format!("{}-Month Trend to {}", span, anchor.long_label()),
            months: trailing_trend(transactions, anchor, span),
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&separator(60));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No transactions yet\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Balance"
        ));

        for row in &self.months {
            output.push_str(&format!(
                "{:<16} {:>14} {:>14} {:>14}\n",
                row.month.short_label(),
                format_money(row.income, currency),
                format_money(row.expenses, currency),
                format_money(row.balance(), currency)
            ));
        }

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(["Month", "Income", "Expenses", "Balance"])?;

        for row in &self.months {
            wtr.write_record([
                row.month.to_string(),
                row.income.format_with_symbol(""),
                row.expenses.format_with_symbol(""),
                row.balance().format_with_symbol(""),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
