//! Shared value types for Keel.
//!
//! This crate provides common types used across all other crates:
//! - Monetary helpers with decimal precision
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{AccountId, CENT_TOLERANCE, format_usd, or_zero};
