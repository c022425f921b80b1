//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, filtering and aggregation.

pub mod expense;

pub use expense::{ExpenseService, ExpenseUpdate, NewExpense, Summary, SummaryFilter};
