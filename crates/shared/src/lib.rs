//! Shared types for GrantPilot.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{CategoryId, ItemId, TemplateId};
