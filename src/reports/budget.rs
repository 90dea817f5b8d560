//! Per-category budget usage for a month
//!
//! Every category except the "Income" sentinel gets a row, including ones
//! with nothing spent.

use std::collections::HashMap;
use std::io::Write;

use super::csv_writer;
use crate::display::report::{format_bar, format_money, separator, truncate};
use crate::error::PlannerResult;
use crate::models::{Category, CategoryId, Money, MonthKey, Transaction};

/// Budget usage for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category_id: CategoryId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub budget: Money,
    pub spent: Money,
    /// Budget minus spent; negative once over budget
    pub remaining: Money,
    /// Spent as a share of budget, capped at 100; 0 for a zero budget
    pub percentage: f64,
}

impl CategorySpend {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Expense totals for `month` against each category's budget
pub fn category_spend(
    transactions: &[Transaction],
    categories: &[Category],
    month: MonthKey,
) -> Vec<CategorySpend> {
    let mut spent_by_category: HashMap<CategoryId, Money> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(month))
    {
        *spent_by_category.entry(txn.category_id).or_default() += txn.amount;
    }

    categories
        .iter()
        .filter(|c| !c.is_income())
        .map(|category| {
            let spent = spent_by_category
                .get(&category.id)
                .copied()
                .unwrap_or_default();
            let percentage = if category.budget.is_positive() {
                spent.percent_of(category.budget).unwrap_or(0.0).clamp(0.0, 100.0)
            } else {
                0.0
            };

            CategorySpend {
                category_id: category.id,
                name: category.name.clone(),
                icon: category.icon.clone(),
                color: category.color.clone(),
                budget: category.budget,
                spent,
                remaining: category.budget - spent,
                percentage,
            }
        })
        .collect()
}

/// Category budget report for a month
#[derive(Debug, Clone)]
pub struct CategorySpendReport {
    pub month: MonthKey,
    pub rows: Vec<CategorySpend>,
    pub total_budget: Money,
    pub total_spent: Money,
}

impl CategorySpendReport {
    pub fn generate(
        transactions: &[Transaction],
        categories: &[Category],
        month: MonthKey,
    ) -> Self {
        let rows = category_spend(transactions, categories, month);
        let total_budget: Money = rows.iter().map(|r| r.budget).sum();
        let total_spent: Money = rows.iter().map(|r| r.spent).sum();

        Self {
            month,
            rows,
            total_budget,
            total_spent,
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budgets: {}\n", self.month.long_label()));
        output.push_str(&separator(86));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No categories yet\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12}  {:<20} {:>5}\n",
            "Category", "Budget", "Spent", "Remaining", "", "%"
        ));

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>12}  {:<20} {:>4.0}%{}\n",
                truncate(&row.name, 20),
                format_money(row.budget, currency),
                format_money(row.spent, currency),
                format_money(row.remaining, currency),
                format_bar(row.percentage, 100.0, 20),
                row.percentage,
                if row.is_over_budget() { " over" } else { "" }
            ));
        }

        output.push_str(&separator(86));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12}\n",
            "TOTAL",
            format_money(self.total_budget, currency),
            format_money(self.total_spent, currency),
            format_money(self.total_budget - self.total_spent, currency)
        ));

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(["Month", "Category", "Budget", "Spent", "Remaining", "Percentage"])?;

        for row in &self.rows {
            wtr.write_record([
                self.month.to_string(),
                row.name.clone(),
                row.budget.format_with_symbol(""),
                row.spent.format_with_symbol(""),
                row.remaining.format_with_symbol(""),
                format!("{:.1}", row.percentage),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
