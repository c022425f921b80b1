//! JSON file store for expenses
//!
//! The persisted medium is a single JSON array of expense objects. Every save
//! replaces the whole file.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStore;

/// Expense store backed by `expenses.json`
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    /// Create a new store over the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn load(&self) -> Vec<Expense> {
        match read_json::<Vec<Expense>, _>(&self.path) {
            Ok(expenses) => {
                debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");
                expenses
            }
            Err(err) => {
                warn!(path = %self.path.display(), "{}; continuing with no expenses", err);
                Vec::new()
            }
        }
    }

    fn save(&self, expenses: &[Expense]) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, expenses)?;
        debug!(count = expenses.len(), path = %self.path.display(), "saved expenses");
        Ok(())
    }
}
