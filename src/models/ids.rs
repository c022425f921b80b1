//! Expense identifier
//!
//! Ids are generated as v4 UUIDs but persisted and matched as opaque strings,
//! so a record whose id is not a UUID still loads and can still be addressed.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique, immutable identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against user input
    pub fn matches(&self, id: &str) -> bool {
        self.0 == id
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_uuids() {
        let id1 = ExpenseId::new();
        let id2 = ExpenseId::new();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn test_matches_is_exact() {
        let id: ExpenseId =
            serde_json::from_str("\"bf274383-0d31-4c7a-9a5e-1f2b3c4d5e6f\"").unwrap();
        assert!(id.matches("bf274383-0d31-4c7a-9a5e-1f2b3c4d5e6f"));
        assert!(!id.matches("BF274383-0D31-4C7A-9A5E-1F2B3C4D5E6F"));
        assert!(!id.matches("bf2743830d314c7a9a5e1f2b3c4d5e6f"));
        assert!(!id.matches(" bf274383-0d31-4c7a-9a5e-1f2b3c4d5e6f"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id: ExpenseId = serde_json::from_str("\"legacy-7\"").unwrap();
        assert_eq!(id.to_string(), "legacy-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"legacy-7\"");
    }
}
