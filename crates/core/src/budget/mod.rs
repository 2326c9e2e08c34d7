//! Budget composition and compliance.

pub mod engine;
pub mod error;
pub mod totals;
pub mod types;
pub mod validation;


pub use engine::{BudgetEngine, BudgetSnapshot, ItemUpdate};
pub use error::BudgetError;
pub use totals::compute_totals;
pub use types::{
    BudgetCategory, BudgetItem, BudgetRules, BudgetTotals, Severity, Violation, ViolationKind,
};
pub use validation::validate;
