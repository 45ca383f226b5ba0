//! Journal-entry balance checking.
//!
//! Imbalance is a data-quality signal for the caller to surface to an
//! operator, not an error: the check always returns a report value.

use keel_shared::CENT_TOLERANCE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::JournalLine;

/// Outcome of a journal-entry balance check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceCheck {
    /// Whether debits and credits agree within tolerance.
    pub is_balanced: bool,
    /// Sum of the lines' debit amounts.
    pub total_debits: Decimal,
    /// Sum of the lines' credit amounts.
    pub total_credits: Decimal,
    /// Absolute difference between the two sides.
    pub difference: Decimal,
}

/// Checks that an entry's debit and credit lines balance within one cent.
#[must_use]
pub fn check_entry_balance(lines: &[JournalLine]) -> BalanceCheck {
    check_entry_balance_with_tolerance(lines, CENT_TOLERANCE)
}

/// Checks entry balance against a caller-supplied tolerance.
#[must_use]
pub fn check_entry_balance_with_tolerance(
    lines: &[JournalLine],
    tolerance: Decimal,
) -> BalanceCheck {
    let total_debits: Decimal = lines.iter().map(JournalLine::debit_or_zero).sum();
    let total_credits: Decimal = lines.iter().map(JournalLine::credit_or_zero).sum();
    let difference = (total_debits - total_credits).abs();

    BalanceCheck {
        is_balanced: difference < tolerance,
        total_debits,
        total_credits,
        difference,
    }
}
