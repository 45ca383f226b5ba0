//! Monetary helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;

/// Tolerance for balanced checks: one cent.
///
/// Debit/credit and accounting-equation comparisons treat differences
/// smaller than this as balanced, so upstream data rounded to cents never
/// trips an imbalance flag.
pub const CENT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Coalesces an optional amount to zero.
///
/// Upstream records may omit any monetary field; a missing amount
/// contributes nothing rather than failing the calculation.
#[must_use]
pub fn or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

/// Formats an amount as fixed-locale USD: two decimal places, comma
/// thousands separators, minus sign ahead of the currency symbol.
///
/// ```
/// use keel_shared::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::new(-50000, 2)), "-$500.00");
/// assert_eq!(format_usd(Decimal::from(1234567)), "$1,234,567.00");
/// ```
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let unsigned = format!("{:.2}", rounded.abs());
    // `{:.2}` always yields exactly one decimal point
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}
