//! Account balance calculations.
//!
//! The single balance-change rule lives here. Every consumer — the
//! per-account running balance, the balance sheet's transactional deltas,
//! the P&L's journal buckets — goes through [`NormalBalance::balance_change`],
//! so the accumulation rule cannot diverge between reports.

use keel_shared::or_zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{AccountType, JournalLine};

/// The side on which an account's balance increases.
///
/// - Asset/Expense: balance += debit - credit (debit-normal)
/// - Liability/Equity/Income: balance += credit - debit (credit-normal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense).
    Debit,
    /// Credit-normal accounts (Liability, Equity, Income).
    Credit,
}

impl NormalBalance {
    /// Calculates the balance change contributed by one debit/credit pair.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

impl AccountType {
    /// The normal balance side for this account type.
    #[must_use]
    pub fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Income => NormalBalance::Credit,
        }
    }
}

/// Computes the running balance of a single account.
///
/// Starting from the opening balance (zero when absent), each line moves the
/// balance by its normal-side change for the given account type. Lines are
/// assumed to belong to the account; their own relation fields are ignored.
#[must_use]
pub fn account_balance(
    account_type: AccountType,
    opening_balance: Option<Decimal>,
    lines: &[JournalLine],
) -> Decimal {
    let side = account_type.normal_balance();
    lines.iter().fold(or_zero(opening_balance), |balance, line| {
        balance + side.balance_change(line.debit_or_zero(), line.credit_or_zero())
    })
}
