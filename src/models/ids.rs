//! Strongly-typed ID wrappers for all entity types
//!
//! IDs are opaque strings: freshly created records get a random UUID, but
//! any string found in stored data or a backup (e.g. the built-in category
//! id `"mercado"`) is accepted as-is. The newtypes keep expense, recurring
//! and category ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an existing identifier
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Shortened form for list output
            pub fn short(&self) -> &str {
                self.0.get(..8).unwrap_or(&self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ExpenseId);
define_id!(RecurringExpenseId);
define_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_uuids() {
        let id = ExpenseId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, ExpenseId::new());
    }

    #[test]
    fn test_short_form() {
        let id = ExpenseId::from_string("0123456789abcdef");
        assert_eq!(id.short(), "01234567");

        let tiny = CategoryId::from("gustos");
        assert_eq!(tiny.short(), "gustos");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = CategoryId::from("mercado");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"mercado\"");

        let parsed: CategoryId = serde_json::from_str("\"movilidad\"").unwrap();
        assert_eq!(parsed.as_str(), "movilidad");
    }
}
