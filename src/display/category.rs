//! Category display formatting

use super::report::{format_bar, format_money, truncate};
use crate::models::Category;
use crate::reports::CategorySpend;

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category], currency: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'planner init' to create default categories.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:<18}  {:<8}  {}\n",
        "Category",
        "Budget",
        "Icon",
        "Color",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:-<18}  {:-<8}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:<18}  {:<8}  {}\n",
            category.name,
            format_money(category.budget, currency),
            truncate(&category.icon, 18),
            category.color,
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format this month's spending against each category budget
pub fn format_category_spend(rows: &[CategorySpend], currency: &str) -> String {
    if rows.is_empty() {
        return "No budget categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<18} {:>11} {:>11} {:>11}  {:<16} {:>5}\n",
        "Category", "Budget", "Spent", "Remaining", "", "Used"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for row in rows {
        let marker = if row.is_over_budget() { " !" } else { "" };
        output.push_str(&format!(
            "{:<18} {:>11} {:>11} {:>11}  {:<16} {:>4.0}%{}\n",
            truncate(&row.name, 18),
            format_money(row.budget, currency),
            format_money(row.spent, currency),
            format_money(row.remaining, currency),
            format_bar(row.percentage, 100.0, 16),
            row.percentage,
            marker
        ));
    }

    output
}

/// Format category details
pub fn format_category_details(category: &Category, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:     {}\n", category.id));
    output.push_str(&format!(
        "  Budget: {}\n",
        format_money(category.budget, currency)
    ));
    output.push_str(&format!("  Icon:   {}\n", category.icon));
    output.push_str(&format!("  Color:  {}\n", category.color));

    if category.is_income() {
        output.push_str("  (income sentinel, excluded from budget views)\n");
    }

    output
}
