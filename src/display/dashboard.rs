//! Dashboard formatting
//!
//! The dashboard always describes the current calendar month, whatever the
//! selected reporting period is.

use super::category::format_category_spend;
use super::report::{double_separator, format_header, format_money, separator};
use super::transaction::format_recent_transactions;
use crate::models::{Category, Transaction};
use crate::reports::{CategorySpend, MonthlySummary};

const WIDTH: usize = 80;

/// Summary cards: balance with its trend arrow, income, expenses, savings rate
pub fn format_summary_cards(summary: &MonthlySummary, currency: &str) -> String {
    let cards = [
        (
            "Balance",
            format!(
                "{} {}",
                format_money(summary.balance, currency),
                summary.balance_trend().indicator()
            ),
        ),
        ("Income", format_money(summary.income, currency)),
        ("Expenses", format_money(summary.expenses, currency)),
        ("Savings Rate", format!("{:.1}%", summary.savings_rate)),
    ];

    let mut output = String::new();
    for (label, value) in cards {
        output.push_str(&format!("  {:<14} {:>18}\n", label, value));
    }
    output
}

/// Full dashboard view
pub fn format_dashboard(
    summary: &MonthlySummary,
    recent: &[&Transaction],
    spend: &[CategorySpend],
    categories: &[Category],
    currency: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format_header(
        &format!("Dashboard: {}", summary.month.long_label()),
        WIDTH,
    ));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push_str("\n\n");

    output.push_str(&format_summary_cards(summary, currency));
    output.push('\n');

    output.push_str("Recent Transactions\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_recent_transactions(
        recent,
        categories,
        currency,
        date_format,
    ));
    output.push('\n');

    output.push_str("Budgets\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_category_spend(spend, currency));

    output
}
