//! expense-tracker - a simple CLI tool to track your expenses
//!
//! Records expenses (description, amount, category, date) in a local JSON
//! file and provides listing, filtered summaries, updates and deletion.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and display settings
//! - `error`: Custom error types
//! - `models`: The expense entity, its id and money formatting
//! - `storage`: The record store contract and its JSON/in-memory implementations
//! - `services`: Validation, filtering, aggregation and id lookup
//! - `display`: Table and detail rendering
//! - `cli`: clap command definitions and handlers
//!
//! Each invocation loads the record set, runs one operation and, if the
//! operation mutates, replaces the file in full. There is no locking:
//! concurrent invocations against the same file may race, and the last
//! write wins.
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::services::{ExpenseService, NewExpense};
//! use expense_tracker::storage::JsonExpenseStore;
//!
//! let paths = TrackerPaths::new(None)?;
//! let store = JsonExpenseStore::new(paths.expenses_file());
//! let service = ExpenseService::new(&store);
//! let expense = service.add(NewExpense::new("Coffee", "4.50").category("Food"))?;
//! println!("added {}", expense.id);
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TrackerError;
