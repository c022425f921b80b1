//! In-memory expense store
//!
//! Follows the same contract as the JSON store without touching disk.

use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::Expense;

use super::ExpenseStore;

/// Expense store that keeps the record set in memory
#[derive(Default)]
pub struct MemoryExpenseStore {
    data: RwLock<Vec<Expense>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with expenses
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            data: RwLock::new(expenses),
        }
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn load(&self) -> Vec<Expense> {
        match self.data.read() {
            Ok(data) => data.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, expenses: &[Expense]) -> Result<(), TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = expenses.to_vec();
        Ok(())
    }
}
