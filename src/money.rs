//! Money helpers.
//!
//! Prices travel as `f64` on the wire; every sum is computed with `Decimal`
//! and only rounded (two places, half away from zero) when converted back for
//! display or for the order payload.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// Currency suffix used in every rendered price.
pub const CURRENCY: &str = "€";

/// Convert a wire price to `Decimal`. Non-finite values become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a `Decimal` back to `f64`, rounded to two places.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or_default()
}

#[inline]
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as `9.50€`.
pub fn format_price(value: Decimal) -> String {
    format!("{:.2}{}", round(value), CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_pads_two_places() {
        assert_eq!(format_price(to_decimal(9.5)), "9.50€");
        assert_eq!(format_price(Decimal::ZERO), "0.00€");
        assert_eq!(format_price(Decimal::new(19005, 3)), "19.01€");
    }

    #[test]
    fn test_decimal_sums_are_exact() {
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(sum, Decimal::new(3, 1));
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }
}
