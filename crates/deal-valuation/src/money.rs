//! Rounding helpers shared by the valuation and scoring modules.
//!
//! Rounding is applied to the exact binary value of the `f64` using round-half-to-even, so a
//! value such as `2.675` (stored as `2.67499...`) rounds down while an exact tie such as
//! `0.125` rounds to the even neighbour.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for dollar amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Decimal places kept for price-per-metric ratios.
pub const RATIO_SCALE: u32 = 4;

/// Round a dollar amount to cents.
pub fn round_currency(value: f64) -> f64 {
    round_to(value, CURRENCY_SCALE)
}

/// Round a ratio to four decimal places.
pub fn round_ratio(value: f64) -> f64 {
    round_to(value, RATIO_SCALE)
}

/// Round `value` to `scale` decimal places. Non-finite values are returned unchanged.
pub fn round_to(value: f64, scale: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    let rounded = exact.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    // The decimal string parses to the nearest f64, matching a literal written in source.
    rounded.to_string().parse::<f64>().unwrap_or(value)
}
