//! Storage layer for the expense tracker
//!
//! The service layer only sees the [`ExpenseStore`] contract, so the JSON file
//! can be swapped for the in-memory store in tests.

pub mod expenses;
pub mod file_io;
pub mod memory;

pub use expenses::JsonExpenseStore;
pub use memory::MemoryExpenseStore;

use crate::error::TrackerError;
use crate::models::Expense;

/// Loads and persists the full record set
pub trait ExpenseStore {
    /// Read every expense in stored order
    ///
    /// Never fails: an absent, empty or unreadable medium yields an empty set.
    fn load(&self) -> Vec<Expense>;

    /// Replace the persisted record set in full
    fn save(&self, expenses: &[Expense]) -> Result<(), TrackerError>;
}
