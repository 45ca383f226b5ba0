//! Report input and output types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use keel_shared::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::AccountType;

/// Category-keyed amounts within a report section.
///
/// Keys are unique category or account names. A sorted map keeps display
/// order deterministic; ordering is a presentation choice, totals are
/// summation either way.
pub type CategoryTotals = BTreeMap<String, Decimal>;

/// Invoice classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    /// Customer bill: paid amounts are revenue, due amounts are receivable.
    Sales,
    /// Vendor bill: paid amounts are expenses, due amounts are payable.
    Purchase,
}

/// Projection of a customer or vendor bill.
///
/// Owned by the invoicing subsystem; the engine only reads these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Whether this bill is owed to or by the business.
    #[serde(rename = "type")]
    pub kind: InvoiceKind,
    /// Amount actually paid so far (cash basis).
    pub amount_paid: Option<Decimal>,
    /// Amount still outstanding.
    pub amount_due: Option<Decimal>,
    /// Date the outstanding amount falls due.
    pub due_date: Option<NaiveDate>,
}

/// Platform transaction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money in.
    Revenue,
    /// Money out.
    Expense,
}

/// A ledger-less transaction reported by a third-party sales platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTransaction {
    /// Revenue or expense.
    pub kind: TransactionKind,
    /// Transaction amount.
    pub amount: Option<Decimal>,
    /// Reporting platform, used as the revenue bucket name.
    pub platform_name: Option<String>,
    /// Expense category, used as the expense bucket name.
    pub expense_category_name: Option<String>,
}

/// Profit & Loss report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossReport {
    /// Revenue by category.
    pub revenue: CategoryTotals,
    /// Expenses by category.
    pub expenses: CategoryTotals,
    /// Sum of the revenue categories.
    pub total_revenue: Decimal,
    /// Sum of the expense categories.
    pub total_expenses: Decimal,
    /// Revenue minus expenses; may be negative.
    pub net_profit: Decimal,
}

/// Balance sheet report.
///
/// Zero-balance accounts are omitted from the sections; only non-zero
/// positions are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Asset positions by account name.
    pub assets: CategoryTotals,
    /// Liability positions by account name.
    pub liabilities: CategoryTotals,
    /// Equity positions by account name, including retained earnings.
    pub equity: CategoryTotals,
    /// Sum of the asset positions.
    pub total_assets: Decimal,
    /// Sum of the liability positions.
    pub total_liabilities: Decimal,
    /// Sum of the equity positions.
    pub total_equity: Decimal,
    /// Whether Assets = Liabilities + Equity within tolerance.
    pub is_balanced: bool,
}

/// Outstanding receivables bucketed by days overdue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceAgingReport {
    /// Not yet due (including due exactly today).
    pub current: Decimal,
    /// 1-30 days overdue.
    pub days_30: Decimal,
    /// 31-60 days overdue.
    pub days_60: Decimal,
    /// More than 60 days overdue.
    pub days_90_plus: Decimal,
    /// All outstanding amounts regardless of bucket.
    pub total: Decimal,
}

/// Per-account activity row in a trial balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Debit column total, opening balance included on debit-normal accounts.
    pub total_debit: Decimal,
    /// Credit column total, opening balance included on credit-normal accounts.
    pub total_credit: Decimal,
    /// Normal-side net balance.
    pub balance: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of the debit column.
    pub total_debit: Decimal,
    /// Sum of the credit column.
    pub total_credit: Decimal,
    /// Whether the columns agree within tolerance.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// One row per chart account, in chart order.
    pub accounts: Vec<TrialBalanceRow>,
    /// Column totals.
    pub totals: TrialBalanceTotals,
}
