//! Double-entry bookkeeping primitives.
//!
//! This module implements the ledger-level building blocks:
//! - Domain types for accounts and journal entries
//! - Normal-balance sides and balance accumulation
//! - Journal-entry balance checking

pub mod balance;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{NormalBalance, account_balance};
pub use types::{
    Account, AccountType, JournalEntry, JournalLine, LineAccount, ParseAccountTypeError,
};
pub use validation::{BalanceCheck, check_entry_balance, check_entry_balance_with_tolerance};
