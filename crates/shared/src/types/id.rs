//! Typed IDs for type-safe entity references.
//!
//! Identifiers in GrantPilot are strings: category and template ids come from
//! funder configuration as stable slugs (e.g. `"personnel"`), while item ids
//! are generated on demand. Wrapping them in distinct types prevents
//! accidentally passing a `CategoryId` where an `ItemId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed string-ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from an existing string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the ID, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

typed_id!(CategoryId, "Unique identifier for a budget category.");
typed_id!(ItemId, "Unique identifier for a budget line item.");
typed_id!(TemplateId, "Unique identifier for a funder template.");

impl ItemId {
    /// Generates a fresh item ID using UUID v7 (time-ordered, so generated
    /// ids sort in creation order).
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("item-{}", Uuid::now_v7()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_id_display() {
        let id = CategoryId::new("personnel");
        assert_eq!(id.to_string(), "personnel");
        assert_eq!(id.as_str(), "personnel");
    }

    #[test]
    fn test_typed_id_equality() {
        assert_eq!(CategoryId::new("travel"), CategoryId::from("travel"));
        assert_ne!(CategoryId::new("travel"), CategoryId::new("equipment"));
    }

    #[test]
    fn test_generated_item_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("item-"));
    }

    #[test]
    fn test_typed_id_serde_transparent() {
        let id = CategoryId::new("personnel");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"personnel\"");

        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
