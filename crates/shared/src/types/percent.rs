//! Percentage helpers over `Decimal`.

use rust_decimal::Decimal;

/// Returns `part / whole * 100`, or zero when `whole` is zero.
///
/// The result is exact; round at the presentation edge. A quotient too large
/// for `Decimal` saturates to `Decimal::MAX` or `Decimal::MIN` by sign.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() || part.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Formats a percentage with a fixed number of decimal places and a `%` suffix.
///
/// `format_percent(dec!(36), 1)` yields `"36.0%"`.
#[must_use]
pub fn format_percent(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.*}%", dp as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(dec!(500), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(18000), dec!(50000)), dec!(36));
        assert_eq!(percent_of(dec!(-2000), dec!(10000)), dec!(-20));
    }

    #[test]
    fn test_percent_of_saturates_instead_of_overflowing() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(percent_of(dec!(32000), tiny), Decimal::MAX);
        assert_eq!(percent_of(dec!(-32000), tiny), Decimal::MIN);
        assert_eq!(percent_of(Decimal::MAX, Decimal::ONE), Decimal::MAX);
        assert_eq!(percent_of(Decimal::ZERO, tiny), Decimal::ZERO);
    }

    #[test]
    fn test_format_percent_pads_scale() {
        assert_eq!(format_percent(dec!(36), 1), "36.0%");
        assert_eq!(format_percent(dec!(10.04), 1), "10.0%");
        assert_eq!(format_percent(dec!(46.875), 1), "46.9%");
        assert_eq!(format_percent(dec!(-20), 1), "-20.0%");
    }

    #[test]
    fn test_format_percent_negative_zero() {
        assert_eq!(format_percent(dec!(-0.01), 1), "0.0%");
    }
}
