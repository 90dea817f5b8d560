//! Transaction model
//!
//! A transaction is a single income or expense event. Amounts are stored
//! non-negative; the sign is carried by the transaction type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{CategoryId, TransactionId};
use super::money::Money;
use super::period::MonthKey;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative amount
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    /// The category this transaction is filed under
    pub category_id: CategoryId,

    /// Category name at the time of the last save, used when the category
    /// has since been removed
    #[serde(default)]
    pub category_name: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Display hint copied from the category
    #[serde(default)]
    pub icon: String,
}

impl Transaction {
    /// Create a transaction filed under `category`, snapshotting its name and icon
    pub fn new(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        category: &Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            description: description.into(),
            category_id: category.id,
            category_name: category.name.clone(),
            date,
            icon: category.icon.clone(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The calendar month this transaction is bucketed into
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Check if this transaction falls in the given month
    pub fn in_month(&self, month: MonthKey) -> bool {
        month.contains(self.date)
    }

    /// Amount with the sign implied by the type
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Refresh the category snapshot from the current category record
    pub fn refresh_category(&mut self, category: &Category) {
        self.category_id = category.id;
        self.category_name = category.name.clone();
        self.icon = category.icon.clone();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> Category {
        Category::new("Food", Money::from_units(300), "fa-utensils", "#FF6384")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_snapshots_category() {
        let category = food();
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_units(40),
            "Groceries",
            &category,
            date(2024, 3, 15),
        );

        assert_eq!(txn.category_id, category.id);
        assert_eq!(txn.category_name, "Food");
        assert_eq!(txn.icon, "fa-utensils");
        assert!(txn.is_expense());
        assert_eq!(txn.month(), MonthKey::new(2024, 2));
    }

    #[test]
    fn test_signed_amount() {
        let category = food();
        let mut txn = Transaction::new(
            TransactionType::Expense,
            Money::from_units(40),
            "",
            &category,
            date(2024, 3, 1),
        );
        assert_eq!(txn.signed_amount(), Money::from_units(-40));

        txn.kind = TransactionType::Income;
        assert_eq!(txn.signed_amount(), Money::from_units(40));
    }

    #[test]
    fn test_refresh_category() {
        let mut txn = Transaction::new(
            TransactionType::Expense,
            Money::from_units(10),
            "Bus",
            &food(),
            date(2024, 3, 1),
        );
        let transport = Category::new(
            "Transportation",
            Money::from_units(150),
            "fa-car",
            "#36A2EB",
        );
        txn.refresh_category(&transport);

        assert_eq!(txn.category_id, transport.id);
        assert_eq!(txn.category_name, "Transportation");
        assert_eq!(txn.icon, "fa-car");
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::new(
            TransactionType::Income,
            Money::zero(),
            "",
            &food(),
            date(2024, 3, 1),
        );
        assert!(txn.validate().is_ok());

        txn.amount = Money::from_cents(-1);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_type_parse() {
        assert_eq!(TransactionType::parse("Income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("expense"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("transfer"), None);
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(1999),
            "Lunch",
            &food(),
            date(2024, 3, 15),
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains(r#""type":"expense""#));
        assert!(json.contains(r#""date":"2024-03-15""#));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
