//! Funder templates for instantiating new budgets.

pub mod types;

pub use types::{CategorySeed, FunderTemplate};
