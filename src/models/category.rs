//! Category model
//!
//! A category is a named budget bucket with a monthly spending limit. The
//! category named "Income" is a sentinel: income transactions are filed under
//! it, and it never shows up in budget or spend views.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Name of the sentinel category excluded from budget aggregations
pub const INCOME_CATEGORY_NAME: &str = "Income";

/// Colour used when a breakdown row has no matching category
pub const DEFAULT_COLOR: &str = "#4361ee";

/// Colours handed out to newly created categories, in rotation
pub const CATEGORY_PALETTE: [&str; 7] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#00CC99", "#FF9F40",
];

/// Icon given to categories created without one
pub const DEFAULT_ICON: &str = "fa-tag";

/// A budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique by convention only)
    pub name: String,

    /// Monthly spending limit
    pub budget: Money,

    /// Display hint copied onto transactions filed here
    pub icon: String,

    /// Chart colour, `#RRGGBB`
    pub color: String,
}

impl Category {
    /// Create a new category
    pub fn new(
        name: impl Into<String>,
        budget: Money,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            budget,
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Whether this is the "Income" sentinel
    pub fn is_income(&self) -> bool {
        self.name == INCOME_CATEGORY_NAME
    }

    /// Palette colour for the `index`-th category created
    pub fn palette_color(index: usize) -> &'static str {
        CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
    }

    /// The starter categories seeded into a fresh store
    pub fn defaults() -> Vec<Category> {
        [
            ("Food", 300, "fa-utensils", "#FF6384"),
            ("Transportation", 150, "fa-car", "#36A2EB"),
            ("Housing", 1000, "fa-home", "#FFCE56"),
            ("Entertainment", 100, "fa-film", "#4BC0C0"),
            ("Shopping", 200, "fa-shopping-cart", "#9966FF"),
            (INCOME_CATEGORY_NAME, 0, "fa-money-bill-wave", "#00CC99"),
        ]
        .into_iter()
        .map(|(name, budget, icon, color)| {
            Category::new(name, Money::from_units(budget), icon, color)
        })
        .collect()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if self.budget.is_negative() {
            return Err(CategoryValidationError::NegativeBudget);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBudget,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NegativeBudget => write!(f, "Category budget cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
