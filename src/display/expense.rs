//! Expense display formatting
//!
//! Renders expenses as a table for `list` and as a detail block for the
//! add/update confirmations.

use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

/// One row of the expense table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ExpenseRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Category")]
    pub category: String,
}

impl ExpenseRow {
    pub fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: format_date(expense, settings),
            description: expense.description.clone(),
            amount: expense.money().format_with_symbol(&settings.currency_symbol),
            category: expense.display_category().to_string(),
        }
    }
}

/// Creation date in the user's time zone
fn format_date(expense: &Expense, settings: &Settings) -> String {
    expense
        .date
        .with_timezone(&Local)
        .format(&settings.date_format)
        .to_string()
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID:          {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", format_date(expense, settings)));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.money().format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.display_category()));

    output
}
