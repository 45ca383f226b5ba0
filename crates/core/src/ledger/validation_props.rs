//! Property-based tests for ledger balance checking and accumulation.

use keel_shared::or_zero;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::account_balance;
use super::types::{AccountType, JournalLine, LineAccount};
use super::validation::check_entry_balance;

/// Strategy for generating amounts in cents, up to ~100k.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn optional_amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of(amount_strategy())
}

fn line_strategy() -> impl Strategy<Value = JournalLine> {
    (optional_amount_strategy(), optional_amount_strategy()).prop_map(|(debit, credit)| {
        JournalLine {
            debit,
            credit,
            ..JournalLine::default()
        }
    })
}

fn lines_strategy(max_len: usize) -> impl Strategy<Value = Vec<JournalLine>> {
    prop::collection::vec(line_strategy(), 0..=max_len)
}

fn account_type_strategy() -> impl Strategy<Value = AccountType> {
    prop::sample::select(vec![
        AccountType::Asset,
        AccountType::Liability,
        AccountType::Equity,
        AccountType::Income,
        AccountType::Expense,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The check's totals equal independently computed sums, with missing
    /// amounts counting as zero.
    #[test]
    fn prop_check_totals_match_sums(lines in lines_strategy(20)) {
        let expected_debits: Decimal = lines.iter().map(|l| or_zero(l.debit)).sum();
        let expected_credits: Decimal = lines.iter().map(|l| or_zero(l.credit)).sum();

        let check = check_entry_balance(&lines);

        prop_assert_eq!(check.total_debits, expected_debits);
        prop_assert_eq!(check.total_credits, expected_credits);
        prop_assert_eq!(check.difference, (expected_debits - expected_credits).abs());
    }

    /// `is_balanced` holds exactly when the sides differ by less than a cent.
    #[test]
    fn prop_is_balanced_iff_within_tolerance(lines in lines_strategy(20)) {
        let check = check_entry_balance(&lines);
        prop_assert_eq!(check.is_balanced, check.difference < Decimal::new(1, 2));
    }

    /// Mirroring every amount onto both sides always balances.
    #[test]
    fn prop_mirrored_entries_balance(amounts in prop::collection::vec(amount_strategy(), 1..20)) {
        let lines: Vec<JournalLine> = amounts
            .iter()
            .flat_map(|&amount| {
                [
                    JournalLine { debit: Some(amount), ..JournalLine::default() },
                    JournalLine { credit: Some(amount), ..JournalLine::default() },
                ]
            })
            .collect();

        let check = check_entry_balance(&lines);
        prop_assert!(check.is_balanced);
        prop_assert_eq!(check.difference, Decimal::ZERO);
    }

    /// The check is a pure function: re-running it yields identical output.
    #[test]
    fn prop_check_is_deterministic(lines in lines_strategy(20)) {
        let first = check_entry_balance(&lines);
        let second = check_entry_balance(&lines);
        prop_assert_eq!(first.is_balanced, second.is_balanced);
        prop_assert_eq!(first.total_debits, second.total_debits);
        prop_assert_eq!(first.total_credits, second.total_credits);
        prop_assert_eq!(first.difference, second.difference);
    }

    /// Folding lines through `account_balance` agrees with summing each
    /// line's own balance change when the line carries the same account
    /// type. This is the rule the balance sheet's per-account deltas use,
    /// so the two accumulation paths cannot drift apart.
    #[test]
    fn prop_account_balance_agrees_with_line_deltas(
        account_type in account_type_strategy(),
        opening in optional_amount_strategy(),
        mut lines in lines_strategy(20),
    ) {
        for line in &mut lines {
            line.account = Some(LineAccount {
                account_type,
                name: "Any".to_string(),
            });
        }

        let folded = account_balance(account_type, opening, &lines);
        let delta: Decimal = lines.iter().map(JournalLine::balance_change).sum();

        prop_assert_eq!(folded, or_zero(opening) + delta);
    }

    /// An account's balance over concatenated activity equals the balance
    /// of the first part used as the opening balance of the second.
    #[test]
    fn prop_account_balance_composes(
        account_type in account_type_strategy(),
        first in lines_strategy(10),
        second in lines_strategy(10),
    ) {
        let all: Vec<JournalLine> = first.iter().chain(second.iter()).cloned().collect();

        let direct = account_balance(account_type, None, &all);
        let midpoint = account_balance(account_type, None, &first);
        let resumed = account_balance(account_type, Some(midpoint), &second);

        prop_assert_eq!(direct, resumed);
    }
}
