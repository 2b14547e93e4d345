//! Decimal rounding and scalar conversion.
//!
//! CRITICAL: Rounding strategy for money:
//! - Always round to the currency's minor-unit exponent
//! - Use banker's rounding (round half to even)
//! - Floating-point inputs are converted to decimal before any arithmetic

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use coinage_shared::{MoneyError, MoneyResult};

/// Largest scale a `Decimal` can carry.
pub(crate) const MAX_SCALE: u32 = 28;

/// Round a decimal value using Banker's Rounding.
///
/// - Rounds 2.5 → 2 (to nearest even)
/// - Rounds 3.5 → 4 (to nearest even)
/// - Rounds 2.25 → 2.2 (to nearest even at 1 decimal)
/// - Rounds 2.35 → 2.4 (to nearest even at 1 decimal)
#[must_use]
pub fn round_half_even(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Converts a binary float to its nearest short decimal representation.
pub(crate) fn decimal_from_f64(value: f64) -> MoneyResult<Decimal> {
    if !value.is_finite() {
        return Err(MoneyError::NonFinite {
            value: value.to_string(),
        });
    }
    Decimal::from_f64(value).ok_or(MoneyError::overflow("f64 conversion"))
}

/// Same as [`decimal_from_f64`] for `f32`.
pub(crate) fn decimal_from_f32(value: f32) -> MoneyResult<Decimal> {
    if !value.is_finite() {
        return Err(MoneyError::NonFinite {
            value: value.to_string(),
        });
    }
    Decimal::from_f32(value).ok_or(MoneyError::overflow("f32 conversion"))
}

/// `numerator / denominator`, truncated toward zero at the finest scale that
/// fits a `Decimal`.
///
/// Truncating keeps a proportional share from overshooting its exact value
/// before it is rounded to the minor unit.
pub(crate) fn truncated_ratio(numerator: i64, denominator: i64) -> MoneyResult<Decimal> {
    let numerator = i128::from(numerator);
    let denominator = i128::from(denominator);

    (0..=MAX_SCALE)
        .rev()
        .find_map(|scale| {
            let scaled = numerator.checked_mul(10_i128.checked_pow(scale)?)?;
            let quotient = scaled.checked_div(denominator)?;
            Decimal::try_from_i128_with_scale(quotient, scale).ok()
        })
        .ok_or(MoneyError::overflow("proportion"))
}
