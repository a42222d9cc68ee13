//! Core quote calculation functions.
//!
//! Pure functions for pricing math - no table access, no HTTP.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::tables::CURRENCY;

/// Round to whole pesos, half away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use itsreal_api::pricing::round_cop;
///
/// assert_eq!(round_cop(dec!(349999.65)), 350_000);
/// assert_eq!(round_cop(dec!(10.5)), 11);
/// assert_eq!(round_cop(dec!(10.4)), 10);
/// ```
pub fn round_cop(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Multiply a price bound by a surcharge factor and round to whole pesos.
pub fn apply_surcharge(amount: i64, factor: Decimal) -> i64 {
    round_cop(Decimal::from(amount) * factor)
}

/// Midpoint of a price range, rounded to whole pesos.
pub fn midpoint(min: i64, max: i64) -> i64 {
    round_cop(Decimal::from(min + max) / Decimal::from(2))
}

/// Format a peso amount the way the studio quotes them: thousands grouped
/// with `.` (es-CO), no decimals, currency suffix.
///
/// # Examples
/// ```
/// use itsreal_api::pricing::format_cop;
///
/// assert_eq!(format_cop(525_000), "525.000 COP");
/// assert_eq!(format_cop(999), "999 COP");
/// ```
pub fn format_cop(amount: i64) -> String {
    let unsigned = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(unsigned.len() + unsigned.len() / 3 + 1);
    for (i, digit) in unsigned.chars().enumerate() {
        if i > 0 && (unsigned.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} {}", sign, grouped, CURRENCY)
}
