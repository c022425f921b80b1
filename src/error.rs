//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ExpenseValidationError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Amount missing, non-numeric, zero, negative or too large
    #[error("Amount must be a positive number no larger than 1000000000000 (got '{0}')")]
    InvalidAmount(String),

    /// Description missing or blank
    #[error("Description is required to add an expense")]
    MissingDescription,

    /// Month filter outside 1-12 or not a number
    #[error("Please provide a valid month number (1-12), got '{0}'")]
    InvalidMonth(String),

    /// No records fall in the requested month
    #[error("No expenses found for month {0}")]
    NoMatchingMonth(u32),

    /// No records match the requested category (after any month filter)
    #[error("No expenses found in category: {category}{}", month_suffix(.month))]
    NoMatchingCategory {
        category: String,
        month: Option<u32>,
    },

    /// The record set is empty
    #[error("No expenses found. Please add an expense first.")]
    EmptyStore,

    /// No record carries the given id
    #[error("Expense with ID \"{id}\" not found")]
    NotFound { id: String },

    /// Update called without any usable field
    #[error("No updates provided. Please specify at least one field to update.")]
    NoFieldsProvided,

    /// Summed amounts exceed the representable range
    #[error("Total is too large to compute")]
    TotalOverflow,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Persisted medium could not be decoded
    #[error("Failed to decode expenses: {0}")]
    Decode(String),

    /// Persisted medium could not be overwritten
    #[error("Storage error: {0}")]
    Storage(String),
}

fn month_suffix(month: &Option<u32>) -> String {
    month
        .map(|m| format!(" for month: {}", m))
        .unwrap_or_default()
}

impl TrackerError {
    /// Create a "not found" error for an expense id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Conditions that are reported to the user but are not failures
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyStore | Self::NoMatchingCategory { .. })
    }
}

impl From<ExpenseValidationError> for TrackerError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::EmptyDescription => Self::MissingDescription,
            ExpenseValidationError::NonPositiveAmount(amount) => {
                Self::InvalidAmount(amount.to_string())
            }
        }
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
