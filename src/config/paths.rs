//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory passed by the caller (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::TrackerError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the expenses file and settings
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths, preferring an explicit directory over the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither an override is available nor the current
    /// directory can be determined.
    pub fn new(explicit: Option<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => match std::env::var_os(DATA_DIR_ENV) {
                Some(custom) if !custom.is_empty() => PathBuf::from(custom),
                _ => std::env::current_dir().map_err(|e| {
                    TrackerError::Config(format!(
                        "Could not determine current directory: {}",
                        e
                    ))
                })?,
            },
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to the optional settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.json")
    }
}
