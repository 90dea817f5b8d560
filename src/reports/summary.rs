//! Monthly summary, recent activity and the income/expense split

use std::io::Write;

use super::csv_writer;
use super::series::MonthlyTotals;
use crate::display::report::{format_money, format_percentage, separator};
use crate::error::PlannerResult;
use crate::models::{Money, MonthKey, Transaction};

/// Direction of a month's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTrend {
    Positive,
    Negative,
    Neutral,
}

impl BalanceTrend {
    /// Arrow shown next to the balance card
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Positive => "▲",
            Self::Negative => "▼",
            Self::Neutral => "•",
        }
    }
}

/// Income, expenses, balance and savings rate for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    /// Share of income kept, one decimal place; 0 when there was no income
    pub savings_rate: f64,
}

impl MonthlySummary {
    pub fn generate(transactions: &[Transaction], month: MonthKey) -> Self {
        let totals = MonthlyTotals::for_month(transactions, month);
        let balance = totals.balance();

        Self {
            month,
            income: totals.income,
            expenses: totals.expenses,
            balance,
            savings_rate: savings_rate(totals.income, balance),
        }
    }

    pub fn balance_trend(&self) -> BalanceTrend {
        if self.balance.is_positive() {
            BalanceTrend::Positive
        } else if self.balance.is_negative() {
            BalanceTrend::Negative
        } else {
            BalanceTrend::Neutral
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary: {}\n", self.month.long_label()));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>16} {}\n",
            "Balance",
            format_money(self.balance, currency),
            self.balance_trend().indicator()
        ));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Income",
            format_money(self.income, currency)
        ));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Expenses",
            format_money(self.expenses, currency)
        ));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Savings rate",
            format!("{:.1}%", self.savings_rate)
        ));

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(["Month", "Income", "Expenses", "Balance", "Savings Rate"])?;
        wtr.write_record([
            self.month.to_string(),
            self.income.format_with_symbol(""),
            self.expenses.format_with_symbol(""),
            self.balance.format_with_symbol(""),
            format!("{:.1}", self.savings_rate),
        ])?;
        wtr.flush()?;
        Ok(())
    }
}

/// Summary totals for `month`
pub fn monthly_summary(transactions: &[Transaction], month: MonthKey) -> MonthlySummary {
    MonthlySummary::generate(transactions, month)
}

fn savings_rate(income: Money, balance: Money) -> f64 {
    match balance.percent_of(income) {
        Some(rate) if income.is_positive() => (rate * 10.0).round() / 10.0,
        _ => 0.0,
    }
}

/// The `n` most recent transactions, newest first
///
/// Transactions sharing a date keep their stored order.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(n);
    recent
}

/// Income against expenses for one month, as whole-number shares of their sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeExpenseSplit {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub income_share: u32,
    pub expense_share: u32,
}

impl IncomeExpenseSplit {
    pub fn generate(transactions: &[Transaction], month: MonthKey) -> Self {
        let totals = MonthlyTotals::for_month(transactions, month);
        let total = totals.income + totals.expenses;

        Self {
            month,
            income: totals.income,
            expenses: totals.expenses,
            income_share: rounded_share(totals.income, total),
            expense_share: rounded_share(totals.expenses, total),
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Income vs Expenses: {}\n", self.month.long_label()));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>16} {:>8}\n",
            "Income",
            format_money(self.income, currency),
            format_percentage(self.income_share as f64)
        ));
        output.push_str(&format!(
            "{:<12} {:>16} {:>8}\n",
            "Expenses",
            format_money(self.expenses, currency),
            format_percentage(self.expense_share as f64)
        ));

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(["Month", "Kind", "Amount", "Share"])?;
        wtr.write_record([
            self.month.to_string(),
            "Income".to_string(),
            self.income.format_with_symbol(""),
            self.income_share.to_string(),
        ])?;
        wtr.write_record([
            self.month.to_string(),
            "Expenses".to_string(),
            self.expenses.format_with_symbol(""),
            self.expense_share.to_string(),
        ])?;
        wtr.flush()?;
        Ok(())
    }
}

/// Income/expense split for `month`
pub fn income_expense_split(transactions: &[Transaction], month: MonthKey) -> IncomeExpenseSplit {
    IncomeExpenseSplit::generate(transactions, month)
}

fn rounded_share(part: Money, total: Money) -> u32 {
    part.percent_of(total)
        .map(|pct| pct.round().max(0.0) as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionType};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(kind: TransactionType, units: i64, day: NaiveDate, description: &str) -> Transaction {
        let category = Category::new("Food", Money::from_units(300), "fa-utensils", "#FF6384");
        Transaction::new(kind, Money::from_units(units), description, &category, day)
    }

    #[test]
    fn test_march_scenario() {
        let transactions = vec![
            txn(TransactionType::Income, 1000, date(2024, 3, 1), "Salary"),
            txn(TransactionType::Expense, 400, date(2024, 3, 15), "Groceries"),
        ];
        let summary = monthly_summary(&transactions, MonthKey::new(2024, 2));

        assert_eq!(summary.income, Money::from_units(1000));
        assert_eq!(summary.expenses, Money::from_units(400));
        assert_eq!(summary.balance, Money::from_units(600));
        assert_eq!(summary.savings_rate, 60.0);
        assert_eq!(summary.balance_trend(), BalanceTrend::Positive);
    }

    #[test]
    fn test_balance_is_exact_difference() {
        let mut transactions = vec![
            txn(TransactionType::Income, 0, date(2024, 3, 1), ""),
            txn(TransactionType::Expense, 0, date(2024, 3, 2), ""),
            txn(TransactionType::Income, 0, date(2024, 3, 3), ""),
        ];
        for (txn, cents) in transactions.iter_mut().zip([10, 20, 30]) {
            txn.amount = Money::from_cents(cents);
        }

        let summary = monthly_summary(&transactions, MonthKey::new(2024, 2));
        assert_eq!(summary.balance, summary.income - summary.expenses);
        assert_eq!(summary.balance.cents(), 20);
    }

    #[test]
    fn test_savings_rate_zero_without_income() {
        let transactions = vec![txn(TransactionType::Expense, 250, date(2024, 3, 15), "Rent")];
        let summary = monthly_summary(&transactions, MonthKey::new(2024, 2));

        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.balance, Money::from_units(-250));
        assert_eq!(summary.balance_trend(), BalanceTrend::Negative);
    }

    #[test]
    fn test_savings_rate_rounds_to_one_decimal() {
        let transactions = vec![
            txn(TransactionType::Income, 300, date(2024, 3, 1), ""),
            txn(TransactionType::Expense, 100, date(2024, 3, 2), ""),
        ];
        let summary = monthly_summary(&transactions, MonthKey::new(2024, 2));
        assert_eq!(summary.savings_rate, 66.7);

        let overspent = vec![
            txn(TransactionType::Income, 100, date(2024, 3, 1), ""),
            txn(TransactionType::Expense, 150, date(2024, 3, 2), ""),
        ];
        let summary = monthly_summary(&overspent, MonthKey::new(2024, 2));
        assert_eq!(summary.savings_rate, -50.0);
    }

    #[test]
    fn test_empty_input() {
        let summary = monthly_summary(&[], MonthKey::new(2024, 2));
        assert!(summary.income.is_zero());
        assert!(summary.expenses.is_zero());
        assert!(summary.balance.is_zero());
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.balance_trend(), BalanceTrend::Neutral);

        assert!(recent_transactions(&[], 5).is_empty());
    }

    #[test]
    fn test_recent_transactions_order_and_ties() {
        let transactions = vec![
            txn(TransactionType::Expense, 1, date(2024, 3, 1), "a"),
            txn(TransactionType::Expense, 2, date(2024, 3, 5), "b"),
            txn(TransactionType::Expense, 3, date(2024, 3, 5), "c"),
            txn(TransactionType::Income, 4, date(2024, 2, 28), "d"),
            txn(TransactionType::Expense, 5, date(2024, 3, 3), "e"),
            txn(TransactionType::Expense, 6, date(2024, 3, 5), "f"),
        ];

        let recent = recent_transactions(&transactions, 5);
        let names: Vec<_> = recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "f", "e", "a"]);

        assert_eq!(recent_transactions(&transactions, 10).len(), 6);
    }

    #[test]
    fn test_income_expense_split() {
        let transactions = vec![
            txn(TransactionType::Income, 1000, date(2024, 3, 1), ""),
            txn(TransactionType::Expense, 400, date(2024, 3, 15), ""),
            txn(TransactionType::Expense, 999, date(2024, 4, 1), ""),
        ];
        let split = income_expense_split(&transactions, MonthKey::new(2024, 2));

        assert_eq!(split.income_share, 71);
        assert_eq!(split.expense_share, 29);
    }

    #[test]
    fn test_income_expense_split_empty_month() {
        let split = income_expense_split(&[], MonthKey::new(2024, 2));
        assert_eq!(split.income_share, 0);
        assert_eq!(split.expense_share, 0);
    }

    #[test]
    fn test_summary_csv() {
        let transactions = vec![
            txn(TransactionType::Income, 1000, date(2024, 3, 1), ""),
            txn(TransactionType::Expense, 400, date(2024, 3, 15), ""),
        ];
        let summary = monthly_summary(&transactions, MonthKey::new(2024, 2));

        let mut buf = Vec::new();
        summary.export_csv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Month,Income,Expenses,Balance,Savings Rate\n2024-03,1000.00,400.00,600.00,60.0\n"
        );
    }

    #[test]
    fn test_summary_terminal() {
        let summary = monthly_summary(&[], MonthKey::new(2024, 2));
        let text = summary.format_terminal("$");
        assert!(text.contains("Summary: March 2024"));
        assert!(text.contains("0.0%"));
    }
}
