//! Balance arithmetic helpers
//!
//! Balances are kept as exact decimals and only normalised when they leave
//! the service, so that `100.5` and `100.50` compare equal internally.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits used whenever a balance is rendered.
pub const BALANCE_SCALE: u32 = 2;

/// Rounds half-even to [`BALANCE_SCALE`] and pads with trailing zeros,
/// so `0` becomes `0.00` and `1.005` becomes `1.00`.
pub fn to_balance_scale(value: Decimal) -> Decimal {
    let mut scaled = value.round_dp_with_strategy(BALANCE_SCALE, RoundingStrategy::MidpointNearestEven);
    scaled.rescale(BALANCE_SCALE);
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_is_padded() {
        assert_eq!(to_balance_scale(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_half_even_rounding() {
        assert_eq!(to_balance_scale(dec("1.005")).to_string(), "1.00");
        assert_eq!(to_balance_scale(dec("1.015")).to_string(), "1.02");
        assert_eq!(to_balance_scale(dec("2.675")).to_string(), "2.68");
    }

    #[test]
    fn test_existing_scale_kept() {
        assert_eq!(to_balance_scale(dec("100.50")).to_string(), "100.50");
        assert_eq!(to_balance_scale(dec("250")).to_string(), "250.00");
    }
}
