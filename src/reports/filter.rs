//! Transaction list filtering and category lookups

use crate::models::{Category, CategoryId, MonthKey, Transaction, TransactionType};

/// Optional constraints on a transaction listing; `None` means "all"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category_id: Option<CategoryId>,
    pub month: Option<MonthKey>,
}

impl TransactionFilter {
    /// A filter that matches everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self.category_id.map_or(true, |id| txn.category_id == id)
            && self.month.map_or(true, |month| txn.in_month(month))
    }
}

/// Transactions passing `filter`, newest first (ties keep stored order)
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let mut matched: Vec<&Transaction> =
        transactions.iter().filter(|t| filter.matches(t)).collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

/// Distinct months that have transactions, in order of first appearance
pub fn available_months(transactions: &[Transaction]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = Vec::new();
    for txn in transactions {
        let month = txn.month();
        if !months.contains(&month) {
            months.push(month);
        }
    }
    months
}

/// Look up a category by id
pub fn find_category(categories: &[Category], id: CategoryId) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

/// Name to show for a transaction's category
///
/// Uses the live category when it still exists, otherwise the name saved on
/// the transaction.
pub fn category_display_name<'a>(txn: &'a Transaction, categories: &'a [Category]) -> &'a str {
    find_category(categories, txn.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or(txn.category_name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    struct Fixture {
        food: Category,
        income: Category,
        transactions: Vec<Transaction>,
    }

    fn fixture() -> Fixture {
        let food = Category::new("Food", Money::from_units(300), "fa-utensils", "#FF6384");
        let income = Category::new("Income", Money::zero(), "fa-money-bill-wave", "#00CC99");
        let at = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        let transactions = vec![
            Transaction::new(
                TransactionType::Expense,
                Money::from_units(10),
                "lunch",
                &food,
                at(2024, 3, 2),
            ),
            Transaction::new(
                TransactionType::Income,
                Money::from_units(900),
                "pay",
                &income,
                at(2024, 2, 28),
            ),
            Transaction::new(
                TransactionType::Expense,
                Money::from_units(20),
                "dinner",
                &food,
                at(2024, 3, 9),
            ),
            Transaction::new(
                TransactionType::Expense,
                Money::from_units(30),
                "snacks",
                &food,
                at(2023, 3, 9),
            ),
            Transaction::new(
                TransactionType::Income,
                Money::from_units(50),
                "refund",
                &income,
                at(2024, 3, 2),
            ),
        ];

        Fixture {
            food,
            income,
            transactions,
        }
    }

    fn descriptions(txns: &[&Transaction]) -> Vec<String> {
        txns.iter().map(|t| t.description.clone()).collect()
    }

    #[test]
    fn test_no_filter_sorts_newest_first() {
        let f = fixture();
        let all = filter_transactions(&f.transactions, &TransactionFilter::all());
        assert_eq!(
            descriptions(&all),
            vec!["dinner", "lunch", "refund", "pay", "snacks"]
        );
    }

    #[test]
    fn test_filter_by_kind_and_category() {
        let f = fixture();
        let income = filter_transactions(
            &f.transactions,
            &TransactionFilter::all().with_kind(TransactionType::Income),
        );
        assert_eq!(descriptions(&income), vec!["refund", "pay"]);

        let food = filter_transactions(
            &f.transactions,
            &TransactionFilter::all().with_category(f.food.id),
        );
        assert_eq!(food.len(), 3);
        assert!(food.iter().all(|t| t.category_id == f.food.id));
    }

    #[test]
    fn test_filter_by_month_matches_year_too() {
        let f = fixture();
        let march = filter_transactions(
            &f.transactions,
            &TransactionFilter::all()
                .with_month(MonthKey::new(2024, 2))
                .with_kind(TransactionType::Expense),
        );
        assert_eq!(descriptions(&march), vec!["dinner", "lunch"]);
    }

    #[test]
    fn test_available_months_first_appearance() {
        let f = fixture();
        assert_eq!(
            available_months(&f.transactions),
            vec![
                MonthKey::new(2024, 2),
                MonthKey::new(2024, 1),
                MonthKey::new(2023, 2)
            ]
        );
        assert!(available_months(&[]).is_empty());
    }

    #[test]
    fn test_category_display_name_falls_back_to_snapshot() {
        let f = fixture();
        let txn = &f.transactions[1];
        assert_eq!(category_display_name(txn, &[f.income.clone()]), "Income");

        let mut renamed = f.income.clone();
        renamed.name = "Salary".to_string();
        assert_eq!(category_display_name(txn, &[renamed]), "Salary");

        assert_eq!(category_display_name(txn, &[f.food.clone()]), "Income");
    }
}
