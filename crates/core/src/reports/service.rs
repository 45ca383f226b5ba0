//! Report generation service.
//!
//! Every generator is a pure function over already-fetched collections:
//! each input may independently be `None` (a missing collection contributes
//! nothing), every missing amount coalesces to zero, and a fresh report is
//! allocated on every call.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use keel_shared::{AccountId, CENT_TOLERANCE, or_zero};
use rust_decimal::Decimal;

use crate::ledger::{Account, AccountType, JournalEntry, JournalLine, NormalBalance};

use super::types::{
    BalanceSheetReport, CategoryTotals, Invoice, InvoiceAgingReport, InvoiceKind,
    PlatformTransaction, ProfitLossReport, TransactionKind, TrialBalanceReport, TrialBalanceRow,
    TrialBalanceTotals,
};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates a Profit & Loss report across the three sources.
    ///
    /// Sales invoices contribute their paid amount (cash realized, not the
    /// amount due) to `"Sales Revenue"`; purchase invoices likewise to
    /// `"Vendor Expenses"`. Platform transactions bucket by platform or
    /// expense category name, with fallbacks for unnamed records. Journal
    /// lines on income/expense accounts bucket under the account's name
    /// with their normal-side amount, so reversing entries subtract.
    #[must_use]
    pub fn profit_loss(
        invoices: Option<&[Invoice]>,
        transactions: Option<&[PlatformTransaction]>,
        entries: Option<&[JournalEntry]>,
    ) -> ProfitLossReport {
        let mut revenue = CategoryTotals::new();
        let mut expenses = CategoryTotals::new();

        for invoice in invoices.unwrap_or_default() {
            let paid = or_zero(invoice.amount_paid);
            match invoice.kind {
                InvoiceKind::Sales => add_to_category(&mut revenue, "Sales Revenue", paid),
                InvoiceKind::Purchase => add_to_category(&mut expenses, "Vendor Expenses", paid),
            }
        }

        for transaction in transactions.unwrap_or_default() {
            let amount = or_zero(transaction.amount);
            match transaction.kind {
                TransactionKind::Revenue => {
                    let bucket = transaction.platform_name.as_deref().unwrap_or("Other Revenue");
                    add_to_category(&mut revenue, bucket, amount);
                }
                TransactionKind::Expense => {
                    let bucket = transaction
                        .expense_category_name
                        .as_deref()
                        .unwrap_or("Operating Expenses");
                    add_to_category(&mut expenses, bucket, amount);
                }
            }
        }

        for line in journal_lines(entries) {
            let Some(account) = &line.account else {
                continue;
            };
            // balance_change is credit - debit on income lines and
            // debit - credit on expense lines
            match account.account_type {
                AccountType::Income => {
                    add_to_category(&mut revenue, &account.name, line.balance_change());
                }
                AccountType::Expense => {
                    add_to_category(&mut expenses, &account.name, line.balance_change());
                }
                AccountType::Asset | AccountType::Liability | AccountType::Equity => {}
            }
        }

        let total_revenue = category_total(&revenue);
        let total_expenses = category_total(&expenses);

        ProfitLossReport {
            revenue,
            expenses,
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
        }
    }

    /// Generates a balance sheet, checking the accounting equation within
    /// one cent.
    #[must_use]
    pub fn balance_sheet(
        invoices: Option<&[Invoice]>,
        entries: Option<&[JournalEntry]>,
        accounts: Option<&[Account]>,
        net_profit: Decimal,
    ) -> BalanceSheetReport {
        Self::balance_sheet_with_tolerance(invoices, entries, accounts, net_profit, CENT_TOLERANCE)
    }

    /// Generates a balance sheet with a caller-supplied equation tolerance.
    ///
    /// Outstanding sales/purchase invoice amounts become Accounts
    /// Receivable/Payable when positive. Each chart account's position is
    /// its journal delta plus opening balance; exactly-zero positions are
    /// omitted and income/expense accounts are never placed. A non-zero
    /// `net_profit` folds into equity as `"Retained Earnings"`, additively,
    /// so an equity account of the same name is not overwritten.
    #[must_use]
    pub fn balance_sheet_with_tolerance(
        invoices: Option<&[Invoice]>,
        entries: Option<&[JournalEntry]>,
        accounts: Option<&[Account]>,
        net_profit: Decimal,
        tolerance: Decimal,
    ) -> BalanceSheetReport {
        let mut assets = CategoryTotals::new();
        let mut liabilities = CategoryTotals::new();
        let mut equity = CategoryTotals::new();

        let receivable = outstanding_total(invoices, InvoiceKind::Sales);
        if receivable > Decimal::ZERO {
            add_to_category(&mut assets, "Accounts Receivable", receivable);
        }

        let payable = outstanding_total(invoices, InvoiceKind::Purchase);
        if payable > Decimal::ZERO {
            add_to_category(&mut liabilities, "Accounts Payable", payable);
        }

        // Transactional delta per posted-to account. The line's own account
        // relation decides the sign rule, exactly as account_balance does.
        let mut deltas: HashMap<AccountId, Decimal> = HashMap::new();
        for line in journal_lines(entries) {
            let Some(account_id) = line.account_id else {
                continue;
            };
            *deltas.entry(account_id).or_default() += line.balance_change();
        }

        for account in accounts.unwrap_or_default() {
            let delta = deltas.get(&account.id).copied().unwrap_or_default();
            let total = delta + account.opening_or_zero();
            if total == Decimal::ZERO {
                continue;
            }
            match account.account_type {
                AccountType::Asset => add_to_category(&mut assets, &account.name, total),
                AccountType::Liability => add_to_category(&mut liabilities, &account.name, total),
                AccountType::Equity => add_to_category(&mut equity, &account.name, total),
                AccountType::Income | AccountType::Expense => {}
            }
        }

        if net_profit != Decimal::ZERO {
            add_to_category(&mut equity, "Retained Earnings", net_profit);
        }

        let total_assets = category_total(&assets);
        let total_liabilities = category_total(&liabilities);
        let total_equity = category_total(&equity);

        BalanceSheetReport {
            assets,
            liabilities,
            equity,
            total_assets,
            total_liabilities,
            total_equity,
            is_balanced: (total_assets - (total_liabilities + total_equity)).abs() < tolerance,
        }
    }

    /// Buckets outstanding invoice amounts by days overdue as of today (UTC).
    #[must_use]
    pub fn invoice_aging(invoices: Option<&[Invoice]>) -> InvoiceAgingReport {
        Self::invoice_aging_as_of(invoices, Utc::now().date_naive())
    }

    /// Buckets outstanding invoice amounts by days overdue at a given date.
    ///
    /// An invoice due exactly on `as_of` is current, exactly 30 days
    /// overdue lands in `days_30`, exactly 60 in `days_60`; everything
    /// older is `days_90_plus`. Invoices with no due date are current.
    /// `total` accumulates every outstanding amount regardless of bucket.
    #[must_use]
    pub fn invoice_aging_as_of(invoices: Option<&[Invoice]>, as_of: NaiveDate) -> InvoiceAgingReport {
        let mut report = InvoiceAgingReport::default();

        for invoice in invoices.unwrap_or_default() {
            let due = or_zero(invoice.amount_due);
            report.total += due;

            let days_overdue = invoice
                .due_date
                .map_or(0, |due_date| (as_of - due_date).num_days());

            if days_overdue <= 0 {
                report.current += due;
            } else if days_overdue <= 30 {
                report.days_30 += due;
            } else if days_overdue <= 60 {
                report.days_60 += due;
            } else {
                report.days_90_plus += due;
            }
        }

        report
    }

    /// Generates a trial balance over the chart of accounts.
    #[must_use]
    pub fn trial_balance(
        accounts: Option<&[Account]>,
        entries: Option<&[JournalEntry]>,
    ) -> TrialBalanceReport {
        Self::trial_balance_with_tolerance(accounts, entries, CENT_TOLERANCE)
    }

    /// Generates a trial balance with a caller-supplied column tolerance.
    ///
    /// Each row sums the account's journal activity per column, with the
    /// opening balance folded into the account's normal side; the report is
    /// balanced when the two column totals agree within tolerance.
    #[must_use]
    pub fn trial_balance_with_tolerance(
        accounts: Option<&[Account]>,
        entries: Option<&[JournalEntry]>,
        tolerance: Decimal,
    ) -> TrialBalanceReport {
        let mut activity: HashMap<AccountId, (Decimal, Decimal)> = HashMap::new();
        for line in journal_lines(entries) {
            let Some(account_id) = line.account_id else {
                continue;
            };
            let columns = activity.entry(account_id).or_default();
            columns.0 += line.debit_or_zero();
            columns.1 += line.credit_or_zero();
        }

        let rows: Vec<TrialBalanceRow> = accounts
            .unwrap_or_default()
            .iter()
            .map(|account| {
                let (mut total_debit, mut total_credit) =
                    activity.get(&account.id).copied().unwrap_or_default();

                let side = account.account_type.normal_balance();
                match side {
                    NormalBalance::Debit => total_debit += account.opening_or_zero(),
                    NormalBalance::Credit => total_credit += account.opening_or_zero(),
                }

                TrialBalanceRow {
                    account_id: account.id,
                    name: account.name.clone(),
                    account_type: account.account_type,
                    total_debit,
                    total_credit,
                    balance: side.balance_change(total_debit, total_credit),
                }
            })
            .collect();

        let total_debit: Decimal = rows.iter().map(|row| row.total_debit).sum();
        let total_credit: Decimal = rows.iter().map(|row| row.total_credit).sum();

        TrialBalanceReport {
            accounts: rows,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: (total_debit - total_credit).abs() < tolerance,
            },
        }
    }
}

/// Flattens optional journal entries into their lines.
fn journal_lines<'a>(
    entries: Option<&'a [JournalEntry]>,
) -> impl Iterator<Item = &'a JournalLine> {
    entries.unwrap_or_default().iter().flat_map(|entry| &entry.lines)
}

/// Sum of outstanding amounts over invoices of one kind.
fn outstanding_total(invoices: Option<&[Invoice]>, kind: InvoiceKind) -> Decimal {
    invoices
        .unwrap_or_default()
        .iter()
        .filter(|invoice| invoice.kind == kind)
        .map(|invoice| or_zero(invoice.amount_due))
        .sum()
}

/// Adds an amount into a named category, creating the category on first use.
fn add_to_category(categories: &mut CategoryTotals, name: &str, amount: Decimal) {
    *categories.entry(name.to_string()).or_default() += amount;
}

/// Sum of all category amounts in a section.
fn category_total(categories: &CategoryTotals) -> Decimal {
    categories.values().copied().sum()
}
