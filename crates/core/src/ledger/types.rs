//! Ledger domain types.
//!
//! These are projections of upstream records: every monetary field may be
//! absent, and absent amounts are treated as zero throughout the engine.

use keel_shared::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::balance::NormalBalance;

/// Account classification in the chart of accounts.
///
/// A closed five-value enumeration: the normal balance side of an account is
/// determined solely by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned by the business (cash, receivables, equipment).
    Asset,
    /// Obligations owed by the business (payables, loans).
    Liability,
    /// Owner's residual interest, including retained earnings.
    Equity,
    /// Revenue accounts.
    Income,
    /// Expense accounts.
    Expense,
}

/// Error returned when an upstream account type tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown account type: {0}")]
pub struct ParseAccountTypeError(String);

impl std::str::FromStr for AccountType {
    type Err = ParseAccountTypeError;

    /// Parses an upstream type tag, case-insensitively.
    ///
    /// `"revenue"` is accepted as an alias for [`AccountType::Income`];
    /// anything else unknown is an error rather than a silent default, so a
    /// new upstream tag can never land in the wrong report bucket.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "income" | "revenue" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ParseAccountTypeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
            Self::Equity => write!(f, "equity"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A chart-of-accounts row.
///
/// The running balance is derived from journal activity and the opening
/// balance; it is never stored on the account itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name, used as the report category key.
    pub name: String,
    /// Account classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Balance carried in from before the journal's history.
    pub opening_balance: Option<Decimal>,
}

impl Account {
    /// Opening balance, coalesced to zero when absent.
    #[must_use]
    pub fn opening_or_zero(&self) -> Decimal {
        keel_shared::or_zero(self.opening_balance)
    }
}

/// The account relation attached to a journal line.
///
/// Upstream joins the referenced account's type and name onto each line;
/// the relation may be missing when the join failed or the line is orphaned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAccount {
    /// Account classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Account display name.
    pub name: String,
}

/// A single line of a journal entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    /// The account posted to, when known.
    pub account_id: Option<AccountId>,
    /// Debit amount.
    pub debit: Option<Decimal>,
    /// Credit amount.
    pub credit: Option<Decimal>,
    /// Joined account relation, when known.
    pub account: Option<LineAccount>,
}

impl JournalLine {
    /// Debit amount, coalesced to zero when absent.
    #[must_use]
    pub fn debit_or_zero(&self) -> Decimal {
        keel_shared::or_zero(self.debit)
    }

    /// Credit amount, coalesced to zero when absent.
    #[must_use]
    pub fn credit_or_zero(&self) -> Decimal {
        keel_shared::or_zero(self.credit)
    }

    /// Normal balance side of the line's account.
    ///
    /// Lines with no account relation fall to the credit-normal rule.
    #[must_use]
    pub fn normal_balance(&self) -> NormalBalance {
        self.account
            .as_ref()
            .map_or(NormalBalance::Credit, |a| a.account_type.normal_balance())
    }

    /// Balance change this line contributes to its account.
    #[must_use]
    pub fn balance_change(&self) -> Decimal {
        self.normal_balance()
            .balance_change(self.debit_or_zero(), self.credit_or_zero())
    }
}

/// One formal double-entry posting.
///
/// Desired invariant, checked by [`super::validation::check_entry_balance`]
/// but not enforced structurally: the lines' debits and credits sum to the
/// same amount within tolerance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The entry's debit/credit lines.
    pub lines: Vec<JournalLine>,
}
