//! Expense rankings for a month: the largest single expenses and the
//! per-category breakdown

use std::io::Write;

use super::csv_writer;
use super::filter::{category_display_name, find_category};
use crate::display::report::{format_date, format_money, format_percentage, separator, truncate};
use crate::error::PlannerResult;
use crate::models::{Category, CategoryId, Money, MonthKey, Transaction, DEFAULT_COLOR};

/// Label for breakdown rows whose category no longer exists
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// The `n` largest expenses in `month`, biggest first
///
/// Equal amounts keep their stored order.
pub fn top_expenses(transactions: &[Transaction], month: MonthKey, n: usize) -> Vec<&Transaction> {
    let mut expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(month))
        .collect();
    expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
    expenses.truncate(n);
    expenses
}

/// One category's share of a month's expenses
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category_id: CategoryId,
    pub name: String,
    pub amount: Money,
    /// Share of the month's total expenses; 0 when there were none
    pub percentage: f64,
    pub color: String,
}

/// Expenses in `month` grouped by category, largest first
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    month: MonthKey,
) -> Vec<BreakdownRow> {
    let mut totals: Vec<(CategoryId, Money)> = Vec::new();
    let mut total_expenses = Money::zero();

    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(month))
    {
        total_expenses += txn.amount;
        match totals.iter_mut().find(|(id, _)| *id == txn.category_id) {
            Some((_, amount)) => *amount += txn.amount,
            None => totals.push((txn.category_id, txn.amount)),
        }
    }

    let mut rows: Vec<BreakdownRow> = totals
        .into_iter()
        .map(|(category_id, amount)| {
            let category = find_category(categories, category_id);
            BreakdownRow {
                category_id,
                name: category
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
                amount,
                percentage: amount.percent_of(total_expenses).unwrap_or(0.0),
                color: category
                    .map(|c| c.color.clone())
                    .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows
}

/// A ranked expense, resolved for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopExpenseRow {
    pub description: String,
    pub category: String,
    pub icon: String,
    pub date: chrono::NaiveDate,
    pub amount: Money,
}

/// Largest expenses of a month
#[derive(Debug, Clone)]
pub struct TopExpensesReport {
    pub month: MonthKey,
    pub rows: Vec<TopExpenseRow>,
}

impl TopExpensesReport {
    pub fn generate(
        transactions: &[Transaction],
        categories: &[Category],
        month: MonthKey,
        n: usize,
    ) -> Self {
        let rows = top_expenses(transactions, month, n)
            .into_iter()
            .map(|txn| TopExpenseRow {
                description: txn.description.clone(),
                category: category_display_name(txn, categories).to_string(),
                icon: txn.icon.clone(),
                date: txn.date,
                amount: txn.amount,
            })
            .collect();

        Self { month, rows }
    }

    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Top Expenses: {}\n", self.month.long_label()));
        output.push_str(&separator(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses this month\n");
            return output;
        }

        for (rank, row) in self.rows.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {:<28} {:<16} {:<14} {:>12}\n",
                rank + 1,
                truncate(&row.description, 28),
                truncate(&row.category, 16),
                format_date(row.date, date_format),
                format_money(row.amount, currency)
            ));
        }

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(["Rank", "Date", "Description", "Category", "Amount"])?;

        for (rank, row) in self.rows.iter().enumerate() {
            wtr.write_record([
                (rank + 1).to_string(),
                row.date.format("%Y-%m-%d").to_string(),
                row.description.clone(),
                row.category.clone(),
                row.amount.format_with_symbol(""),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Per-category expense breakdown of a month
#[derive(Debug, Clone)]
pub struct CategoryBreakdownReport {
    pub month: MonthKey,
    pub rows: Vec<BreakdownRow>,
    pub total_expenses: Money,
}

impl CategoryBreakdownReport {
    pub fn generate(
        transactions: &[Transaction],
        categories: &[Category],
        month: MonthKey,
    ) -> Self {
        let rows = category_breakdown(transactions, categories, month);
        let total_expenses: Money = rows.iter().map(|r| r.amount).sum();

        Self {
            month,
            rows,
            total_expenses,
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Breakdown: {}\n", self.month.long_label()));
        output.push_str(&separator(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses this month\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!(
                "{:<28} {:>8} {:>14}   {}\n",
                truncate(&row.name, 28),
                format!("{:.1}%", row.percentage),
                format_money(row.amount, currency),
                row.color
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>8} {:>14}\n",
            "TOTAL",
            format_percentage(100.0),
            format_money(self.total_expenses, currency)
        ));

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(["Month", "Category", "Amount", "Percentage", "Color"])?;

        for row in &self.rows {
            wtr.write_record([
                self.month.to_string(),
                row.name.clone(),
                row.amount.format_with_symbol(""),
                format!("{:.1}", row.percentage),
                row.color.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: &Category, cents: i64, description: &str, day: u32) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Money::from_cents(cents),
            description,
            category,
            date(2024, 3, day),
        )
    }

    #[test]
    fn test_top_expenses_ranked_with_stable_ties() {
        let categories = Category::defaults();
        let food = &categories[0];
        let income = &categories[5];
        let transactions = vec![
            expense(food, 500, "a", 1),
            expense(food, 9000, "b", 2),
            expense(food, 500, "c", 3),
            Transaction::new(
                TransactionType::Income,
                Money::from_units(5000),
                "salary",
                income,
                date(2024, 3, 1),
            ),
            expense(food, 2000, "d", 4),
            expense(food, 500, "e", 5),
            expense(food, 100, "f", 6),
            Transaction::new(
                TransactionType::Expense,
                Money::from_units(999),
                "april",
                food,
                date(2024, 4, 1),
            ),
        ];

        let top = top_expenses(&transactions, MonthKey::new(2024, 2), 5);
        let names: Vec<_> = top.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a", "c", "e"]);
        assert!(top.iter().all(|t| t.is_expense()));
        assert!(top.windows(2).all(|w| w[0].amount >= w[1].amount));
    }

    #[test]
    fn test_top_expenses_fewer_than_n() {
        let categories = Category::defaults();
        let transactions = vec![expense(&categories[0], 100, "only", 1)];
        assert_eq!(top_expenses(&transactions, MonthKey::new(2024, 2), 5).len(), 1);
        assert!(top_expenses(&transactions, MonthKey::new(2024, 3), 5).is_empty());
    }

    #[test]
    fn test_category_breakdown() {
        let categories = Category::defaults();
        let food = &categories[0];
        let transport = &categories[1];
        let transactions = vec![
            expense(food, 2500, "lunch", 1),
            expense(transport, 5000, "train", 2),
            expense(food, 2500, "dinner", 3),
        ];

        let rows = category_breakdown(&transactions, &categories, MonthKey::new(2024, 2));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Food");
        assert_eq!(rows[0].amount, Money::from_cents(5000));
        assert_eq!(rows[0].percentage, 50.0);
        assert_eq!(rows[0].color, "#FF6384");
        assert_eq!(rows[1].name, "Transportation");
    }

    #[test]
    fn test_category_breakdown_unknown_category() {
        let removed = Category::new("Gym", Money::from_units(40), "fa-dumbbell", "#FF9F40");
        let categories = Category::defaults();
        let transactions = vec![
            expense(&removed, 3000, "membership", 1),
            expense(&categories[0], 1000, "snack", 2),
        ];

        let rows = category_breakdown(&transactions, &categories, MonthKey::new(2024, 2));
        assert_eq!(rows[0].name, UNKNOWN_CATEGORY);
        assert_eq!(rows[0].color, DEFAULT_COLOR);
        assert_eq!(rows[0].percentage, 75.0);
        assert_eq!(rows[1].percentage, 25.0);
    }

    #[test]
    fn test_category_breakdown_empty() {
        assert!(category_breakdown(&[], &Category::defaults(), MonthKey::new(2024, 2)).is_empty());
    }

    #[test]
    fn test_top_expenses_report_uses_snapshot_name() {
        let removed = Category::new("Gym", Money::from_units(40), "fa-dumbbell", "#FF9F40");
        let transactions = vec![expense(&removed, 3000, "membership", 1)];

        let report = TopExpensesReport::generate(&transactions, &[], MonthKey::new(2024, 2), 5);
        assert_eq!(report.rows[0].category, "Gym");

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Rank,Date,Description,Category,Amount\n1,2024-03-01,membership,Gym,30.00\n"
        );
    }

    #[test]
    fn test_breakdown_report_terminal() {
        let categories = Category::defaults();
        let transactions = vec![expense(&categories[0], 1000, "snack", 2)];
        let report =
            CategoryBreakdownReport::generate(&transactions, &categories, MonthKey::new(2024, 2));

        assert_eq!(report.total_expenses, Money::from_cents(1000));
        let text = report.format_terminal("$");
        assert!(text.contains("Food"));
        assert!(text.contains("100.0%"));
    }
}
