//! Expense model
//!
//! The single entity of the tracker: one dated, categorized spending entry.

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Category assigned when none is supplied
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Strictly positive amount
    pub amount: f64,

    /// Free-form category
    #[serde(default)]
    pub category: String,

    /// Creation instant
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense stamped with a fresh id and the current instant
    ///
    /// A blank category is replaced by [`UNCATEGORIZED`].
    pub fn new(description: impl Into<String>, amount: f64, category: Option<&str>) -> Self {
        let category = match category.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => UNCATEGORIZED.to_string(),
        };

        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            date: Utc::now(),
        }
    }

    /// The amount rounded to cents
    pub fn money(&self) -> Money {
        Money::from_amount(self.amount)
    }

    /// Category for display, substituting the sentinel for a blank value
    pub fn display_category(&self) -> &str {
        if self.category.trim().is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Whether the expense was recorded in the given calendar month (1-12),
    /// as seen in the user's local time zone
    pub fn is_in_month(&self, month: u32) -> bool {
        self.date.with_timezone(&Local).month() == month
    }

    /// Case-insensitive category comparison
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !is_usable_amount(self.amount) {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

/// Largest amount a single expense may carry
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Finite, strictly positive and no larger than [`MAX_AMOUNT`]
pub fn is_usable_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0 && amount <= MAX_AMOUNT
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.description, self.money())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(
                    f,
                    "Expense amount must be positive and at most {}, got {}",
                    MAX_AMOUNT, amount
                )
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
