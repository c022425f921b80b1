//! Expense service
//!
//! Provides the business logic for expenses: creation with validation,
//! listing, filtered summaries, partial updates and deletion by id.
//!
//! Every operation loads the record set fresh from the store, and mutating
//! operations save the complete set before returning.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::expense::is_usable_amount;
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub description: String,
    /// Raw amount as typed by the user
    pub amount: String,
    pub category: Option<String>,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Fields to change on an existing expense
///
/// A text field counts as supplied only when it is non-blank; the amount
/// counts only when it parses to a positive number.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Filters for the summary operation
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    /// Raw month number (1-12)
    pub month: Option<String>,
    pub category: Option<String>,
}

impl SummaryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by calendar month
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Filter by category (case-insensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Result of a summary, echoing the filters that were applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: Money,
    pub count: usize,
    pub month: Option<u32>,
    pub category: Option<String>,
}

impl Summary {
    /// Compose the user-facing message with the given currency symbol
    pub fn message(&self, currency_symbol: &str) -> String {
        let total = self.total.format_with_symbol(currency_symbol);
        match (self.month, self.category.as_deref()) {
            (Some(month), Some(category)) => format!(
                "Total expenses in category '{}' for month {}: {}",
                category, month, total
            ),
            (Some(month), None) => format!("Total expenses in month {}: {}", month, total),
            (None, Some(category)) => {
                format!("Total expenses in category '{}': {}", category, total)
            }
            (None, None) => format!("Total expenses: {}", total),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message("$"))
    }
}

/// Parse a user-supplied amount, accepting only finite positive numbers
pub fn parse_amount(raw: &str) -> TrackerResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if is_usable_amount(amount) => Ok(amount),
        _ => Err(TrackerError::InvalidAmount(raw.to_string())),
    }
}

/// Parse a user-supplied month number in 1-12
pub fn parse_month(raw: &str) -> TrackerResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(TrackerError::InvalidMonth(raw.to_string())),
    }
}

/// Treat blank text as absent
fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a dyn ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store }
    }

    /// Record a new expense and return it
    pub fn add(&self, input: NewExpense) -> TrackerResult<Expense> {
        let amount = parse_amount(&input.amount)?;

        let description = input.description.trim();
        if description.is_empty() {
            return Err(TrackerError::MissingDescription);
        }

        let mut expenses = self.store.load();

        let mut expense = Expense::new(description, amount, input.category.as_deref());
        while expenses.iter().any(|e| e.id == expense.id) {
            expense.id = ExpenseId::new();
        }
        expense.validate()?;

        expenses.push(expense.clone());
        self.store.save(&expenses)?;

        debug!(id = %expense.id, "added expense");
        Ok(expense)
    }

    /// All expenses in stored order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        let expenses = self.store.load();
        if expenses.is_empty() {
            return Err(TrackerError::EmptyStore);
        }
        Ok(expenses)
    }

    /// Total the expenses matching the filter
    ///
    /// The month filter is applied before the category filter.
    pub fn summary(&self, filter: &SummaryFilter) -> TrackerResult<Summary> {
        let mut expenses = self.store.load();
        if expenses.is_empty() {
            return Err(TrackerError::EmptyStore);
        }

        let month = match supplied(filter.month.as_deref()) {
            Some(raw) => {
                let month = parse_month(raw)?;
                expenses.retain(|e| e.is_in_month(month));
                if expenses.is_empty() {
                    return Err(TrackerError::NoMatchingMonth(month));
                }
                Some(month)
            }
            None => None,
        };

        let category = match supplied(filter.category.as_deref()) {
            Some(category) => {
                expenses.retain(|e| e.matches_category(category));
                if expenses.is_empty() {
                    return Err(TrackerError::NoMatchingCategory {
                        category: category.to_string(),
                        month,
                    });
                }
                Some(category.to_string())
            }
            None => None,
        };

        let total = expenses
            .iter()
            .try_fold(Money::zero(), |acc, e| acc.checked_add(e.money()))
            .ok_or(TrackerError::TotalOverflow)?;

        Ok(Summary {
            total,
            count: expenses.len(),
            month,
            category,
        })
    }

    /// Apply the supplied fields to the expense with the given id
    ///
    /// The id and date never change, and the record keeps its position.
    pub fn update(&self, id: &str, changes: ExpenseUpdate) -> TrackerResult<Expense> {
        let mut expenses = self.store.load();
        let index = find_index(&expenses, id).ok_or_else(|| TrackerError::not_found(id))?;

        let description = supplied(changes.description.as_deref());
        let category = supplied(changes.category.as_deref());
        let amount = match supplied(changes.amount.as_deref()) {
            Some(raw) => match parse_amount(raw) {
                Ok(amount) => Some(amount),
                Err(err) => {
                    warn!("ignoring amount for expense {}: {}", id, err);
                    None
                }
            },
            None => None,
        };

        if description.is_none() && amount.is_none() && category.is_none() {
            return Err(TrackerError::NoFieldsProvided);
        }

        let expense = &mut expenses[index];
        if let Some(description) = description {
            expense.description = description.to_string();
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(category) = category {
            expense.category = category.to_string();
        }
        expense.validate()?;
        let updated = expense.clone();

        self.store.save(&expenses)?;

        debug!(id = %updated.id, "updated expense");
        Ok(updated)
    }

    /// Remove the expense with the given id and return it
    pub fn delete(&self, id: &str) -> TrackerResult<Expense> {
        let expenses = self.store.load();

        let (mut removed, kept): (Vec<_>, Vec<_>) =
            expenses.into_iter().partition(|e| e.id.matches(id));
        if removed.is_empty() {
            return Err(TrackerError::not_found(id));
        }

        self.store.save(&kept)?;

        debug!(id, remaining = kept.len(), "deleted expense");
        Ok(removed.swap_remove(0))
    }
}

fn find_index(expenses: &[Expense], id: &str) -> Option<usize> {
    expenses.iter().position(|e| e.id.matches(id))
}
