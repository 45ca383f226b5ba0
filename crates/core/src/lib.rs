//! Core calculation engine for Keel.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. It derives financial reports from already-fetched
//! collections: the caller supplies invoices, platform transactions,
//! journal entries, and the chart of accounts; every function returns a
//! freshly allocated report value and retains no state between calls.
//!
//! # Modules
//!
//! - `ledger` - Double-entry bookkeeping primitives
//! - `reports` - Financial report generation

pub mod ledger;
pub mod reports;
