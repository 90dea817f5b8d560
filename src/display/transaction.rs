//! Transaction display formatting
//!
//! Formats transaction lists and details for terminal output. Category names
//! come from the live category when it still exists and from the name saved on
//! the transaction otherwise.

use super::report::{format_date, format_signed, truncate, FALLBACK_ICON};
use crate::models::{Category, Transaction};
use crate::reports::category_display_name;

/// Icon to show for a transaction
pub fn transaction_icon(txn: &Transaction) -> &str {
    if txn.icon.trim().is_empty() {
        FALLBACK_ICON
    } else {
        &txn.icon
    }
}

/// Format a single transaction as a table row
pub fn format_transaction_row(
    txn: &Transaction,
    categories: &[Category],
    currency: &str,
    date_format: &str,
) -> String {
    format!(
        "{:<12} {:<14} {:<28} {:<16} {:>12}",
        txn.id.to_string(),
        format_date(txn.date, date_format),
        truncate(&txn.description, 28),
        truncate(category_display_name(txn, categories), 16),
        format_signed(txn.amount, txn.kind, currency)
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_list(
    transactions: &[&Transaction],
    categories: &[Category],
    currency: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<14} {:<28} {:<16} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(86));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, categories, currency, date_format));
        output.push('\n');
    }

    output
}

/// Compact list used by the dashboard's recent activity panel
pub fn format_recent_transactions(
    transactions: &[&Transaction],
    categories: &[Category],
    currency: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "  No transactions yet\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format!(
            "  {:<28} {:<16} {:<14} {:>12}\n",
            truncate(&txn.description, 28),
            truncate(category_display_name(txn, categories), 16),
            format_date(txn.date, date_format),
            format_signed(txn.amount, txn.kind, currency)
        ));
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    categories: &[Category],
    currency: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "  Amount:      {}\n",
        format_signed(txn.amount, txn.kind, currency)
    ));
    output.push_str(&format!("  Date:        {}\n", format_date(txn.date, date_format)));

    if !txn.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", txn.description));
    }

    output.push_str(&format!(
        "  Category:    {}\n",
        category_display_name(txn, categories)
    ));
    output.push_str(&format!("  Icon:        {}\n", transaction_icon(txn)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;

    fn groceries(category: &Category) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Money::from_cents(4250),
            "Groceries",
            category,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_transaction_list(&[], &[], "$", "%Y-%m-%d");
        assert!(output.contains("No transactions found"));
    }

    #[test]
    fn test_format_list() {
        let categories = Category::defaults();
        let txn = groceries(&categories[0]);

        let output = format_transaction_list(&[&txn], &categories, "$", "%b %-d, %Y");
        assert!(output.contains("Groceries"));
        assert!(output.contains("Food"));
        assert!(output.contains("Mar 15, 2024"));
        assert!(output.contains("-$42.50"));
        assert!(output.contains(&txn.id.to_string()));
    }

    #[test]
    fn test_deleted_category_falls_back_to_snapshot() {
        let gone = Category::new("Gym", Money::from_units(40), "fa-dumbbell", "#FF9F40");
        let txn = groceries(&gone);

        let output = format_recent_transactions(&[&txn], &Category::defaults(), "$", "%Y-%m-%d");
        assert!(output.contains("Gym"));
    }

    #[test]
    fn test_details_and_icon_fallback() {
        let categories = Category::defaults();
        let mut txn = groceries(&categories[0]);
        txn.kind = TransactionType::Income;
        txn.icon = String::new();

        let output = format_transaction_details(&txn, &categories, "€", "%Y-%m-%d");
        assert!(output.contains("+€42.50"));
        assert!(output.contains("Type:        Income"));
        assert!(output.contains(FALLBACK_ICON));
    }
}
