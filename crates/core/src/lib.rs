//! Core business logic for GrantPilot.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `budget` - Budget composition, totals, and compliance validation
//! - `template` - Funder templates for instantiating new budgets

pub mod budget;
pub mod template;
