//! Overflow-free `Decimal` arithmetic.
//!
//! `rust_decimal` operators panic past ~7.9e28. P&L math must answer for every
//! parsed input, so results beyond the range clamp to `Decimal::MAX` or
//! `Decimal::MIN` with the sign the exact result would have had.

use rust_decimal::Decimal;
use tracing::warn;

fn clamp(negative: bool) -> Decimal {
    warn!(negative, "Decimal overflow, saturating result");
    if negative { Decimal::MIN } else { Decimal::MAX }
}

pub fn add(lhs: Decimal, rhs: Decimal) -> Decimal {
    // Only same-signed operands overflow
    lhs.checked_add(rhs)
        .unwrap_or_else(|| clamp(lhs.is_sign_negative()))
}

pub fn sub(lhs: Decimal, rhs: Decimal) -> Decimal {
    // Only opposite-signed operands overflow
    lhs.checked_sub(rhs)
        .unwrap_or_else(|| clamp(lhs.is_sign_negative()))
}

pub fn mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs)
        .unwrap_or_else(|| clamp(lhs.is_sign_negative() != rhs.is_sign_negative()))
}

/// Callers guarantee a non-zero divisor.
pub fn div(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_div(rhs)
        .unwrap_or_else(|| clamp(lhs.is_sign_negative() != rhs.is_sign_negative()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_range_matches_operators() {
        assert_eq!(add(dec!(1.5), dec!(2.25)), dec!(3.75));
        assert_eq!(sub(dec!(1.5), dec!(2.25)), dec!(-0.75));
        assert_eq!(mul(dec!(-1.5), dec!(4)), dec!(-6));
        assert_eq!(div(dec!(1), dec!(8)), dec!(0.125));
    }

    #[test]
    fn test_overflow_clamps_with_sign() {
        assert_eq!(add(Decimal::MAX, dec!(1)), Decimal::MAX);
        assert_eq!(add(Decimal::MIN, dec!(-1)), Decimal::MIN);
        assert_eq!(sub(Decimal::MIN, dec!(1)), Decimal::MIN);
        assert_eq!(sub(Decimal::MAX, dec!(-1)), Decimal::MAX);
        assert_eq!(mul(Decimal::MAX, dec!(-2)), Decimal::MIN);
        assert_eq!(mul(Decimal::MIN, dec!(-2)), Decimal::MAX);
        assert_eq!(div(dec!(10), dec!(0.0000000000000000000000000001)), Decimal::MAX);
        assert_eq!(div(dec!(-10), dec!(0.0000000000000000000000000001)), Decimal::MIN);
    }
}
