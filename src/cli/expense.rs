//! Expense CLI commands
//!
//! Bridges the clap argument parsing with the expense service.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::TrackerResult;
use crate::models::Expense;
use crate::services::{ExpenseService, ExpenseUpdate, NewExpense, SummaryFilter};
use crate::storage::ExpenseStore;

/// Expense commands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(short, long)]
        description: String,
        /// Amount of the expense
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Expense category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List all expenses
    List,
    /// Delete an expense by its ID
    Delete {
        /// The ID of the expense to delete
        #[arg(long)]
        id: String,
    },
    /// Show a summary of all expenses
    Summary {
        /// Filter summary by a specific month (e.g., 8 for August)
        #[arg(short, long, allow_hyphen_values = true)]
        month: Option<String>,
        /// Expense category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Update some info on your expenses
    Update {
        /// The ID of the expense to update
        #[arg(long)]
        id: String,
        /// Description of the expense
        #[arg(short, long)]
        description: Option<String>,
        /// Amount of the expense
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Expense category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
///
/// Empty-store and no-matching-category conditions are printed as messages
/// and are not treated as failures.
pub fn handle_expense_command(
    store: &dyn ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match run(store, settings, cmd) {
        Err(err) if err.is_informational() => {
            println!("{}", err);
            Ok(())
        }
        other => other,
    }
}

fn run(store: &dyn ExpenseStore, settings: &Settings, cmd: ExpenseCommands) -> TrackerResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let expense = service.add(NewExpense {
                description,
                amount,
                category,
            })?;
            println!(
                "Expense added: {} (ID: {})",
                describe(&expense, settings),
                expense.id
            );
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            println!("{}", format_expense_table(&expenses, settings));
            println!("\nTotal: {} expenses", expenses.len());
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete(&id)?;
            println!("Expense deleted successfully: {}", describe(&removed, settings));
        }

        ExpenseCommands::Summary { month, category } => {
            let summary = service.summary(&SummaryFilter { month, category })?;
            println!("{}", summary.message(&settings.currency_symbol));
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
            category,
        } => {
            let updated = service.update(
                &id,
                ExpenseUpdate {
                    description,
                    amount,
                    category,
                },
            )?;
            println!(
                "Updated expense: {} (ID: {})",
                describe(&updated, settings),
                updated.id
            );
            print!("{}", format_expense_details(&updated, settings));
        }
    }

    Ok(())
}

fn describe(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{} - {}",
        expense.description,
        expense.money().format_with_symbol(&settings.currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::storage::MemoryExpenseStore;

    #[test]
    fn test_empty_list_is_not_a_failure() {
        let store = MemoryExpenseStore::new();
        let result = handle_expense_command(&store, &Settings::default(), ExpenseCommands::List);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validation_errors_propagate() {
        let store = MemoryExpenseStore::new();
        let result = handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Add {
                description: "Coffee".into(),
                amount: "-2".into(),
                category: None,
            },
        );
        assert!(matches!(result, Err(TrackerError::InvalidAmount(_))));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_add_then_delete() {
        let store = MemoryExpenseStore::new();
        let settings = Settings::default();
        handle_expense_command(
            &store,
            &settings,
            ExpenseCommands::Add {
                description: "Coffee".into(),
                amount: "4.50".into(),
                category: Some("Food".into()),
            },
        )
        .unwrap();

        let id = store.load()[0].id.to_string();
        handle_expense_command(&store, &settings, ExpenseCommands::Delete { id }).unwrap();
        assert!(store.load().is_empty());
    }
}
