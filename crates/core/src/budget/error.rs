//! Budget error types.

use grantpilot_shared::{CategoryId, ItemId};
use thiserror::Error;

/// Structural errors raised by budget mutations.
///
/// These indicate an integration bug in the caller (a dangling id), not a
/// user-facing validation failure. Compliance problems are reported as
/// [`Violation`](super::Violation) data instead.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Category not found.
    #[error("Budget category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Item not found within the category.
    #[error("Budget item not found: {item} in category {category}")]
    ItemNotFound {
        /// Category that was searched.
        category: CategoryId,
        /// Missing item ID.
        item: ItemId,
    },
}
