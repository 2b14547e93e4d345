//! Splitting money into parts that sum exactly to the original.
//!
//! Both algorithms work on minor units, so the sum of the parts' minor units
//! always equals the source's minor units (no cents lost or gained).
//!
//! Where the rounding remainder goes is fixed:
//! - Even split: the first `remainder` parts each get one extra unit
//! - Proportional split: the last part absorbs the whole residual

use tracing::{debug, warn};

use coinage_shared::{Currency, MoneyError, MoneyResult};

use super::Money;
use super::rounding::{round_half_even, truncated_ratio};

impl<C: Currency> Money<C> {
    /// Splits this amount into `parts` near-equal parts.
    ///
    /// Returns an empty vector when `parts <= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use coinage_core::{Money, Usd};
    ///
    /// // 10.00 / 6 = [1.67, 1.67, 1.67, 1.67, 1.66, 1.66]
    /// let parts = Money::<Usd>::new(dec!(10)).distributed_evenly(6).unwrap();
    /// assert_eq!(parts[0], Money::new(dec!(1.67)));
    /// assert_eq!(parts[5], Money::new(dec!(1.66)));
    /// assert_eq!(parts.iter().sum::<Money<Usd>>(), Money::new(dec!(10)));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the amount does not fit 64-bit
    /// minor units.
    pub fn distributed_evenly(&self, parts: i64) -> MoneyResult<Vec<Self>> {
        if parts <= 0 {
            return Ok(Vec::new());
        }

        let total = self.to_minor_units()?;
        let quotient = total / parts;
        let remainder = (total % parts).unsigned_abs();
        let bump = total.signum();

        let count = usize::try_from(parts).map_err(|_| MoneyError::overflow("distributed_evenly"))?;
        let extra_count =
            usize::try_from(remainder).map_err(|_| MoneyError::overflow("distributed_evenly"))?;

        debug!(
            currency = C::CODE,
            total, parts, quotient, extra_count, "Distributing evenly"
        );

        // First `extra_count` parts get one more unit, in the direction of the sign
        Ok((0..count)
            .map(|i| {
                if i < extra_count {
                    Self::from_minor_units(quotient + bump)
                } else {
                    Self::from_minor_units(quotient)
                }
            })
            .collect())
    }

    /// Splits this amount in proportion to `weights`.
    ///
    /// Each weight contributes its minor units to the ratio. Every part but
    /// the last is rounded half-to-even; the last part takes whatever is left
    /// so the total is exact. A zero amount yields one zero part per weight.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use coinage_core::{Money, Usd};
    ///
    /// let total = Money::<Usd>::new(dec!(10));
    /// let weights = [Money::new(dec!(2)), Money::new(dec!(5))];
    /// let parts = total.distributed_proportionally(&weights).unwrap();
    /// assert_eq!(parts, vec![Money::new(dec!(2.86)), Money::new(dec!(7.14))]);
    /// ```
    ///
    /// # Errors
    ///
    /// - `MoneyError::DegenerateWeights` if two or more weights sum to zero
    ///   while the amount is non-zero
    /// - `MoneyError::Overflow` if any minor-unit figure leaves the `i64` range
    pub fn distributed_proportionally(&self, weights: &[Self]) -> MoneyResult<Vec<Self>> {
        let Some((_, leading)) = weights.split_last() else {
            return Ok(Vec::new());
        };

        let desired_total = self.to_minor_units()?;
        if desired_total == 0 {
            return Ok(vec![Self::zero(); weights.len()]);
        }

        let weight_units = weights
            .iter()
            .map(Self::to_minor_units)
            .collect::<MoneyResult<Vec<_>>>()?;
        let original_total = weight_units.iter().try_fold(0_i64, |acc, units| {
            acc.checked_add(*units)
                .ok_or(MoneyError::overflow("distributed_proportionally"))
        })?;

        if original_total == 0 && !leading.is_empty() {
            warn!(
                currency = C::CODE,
                parts = weights.len(),
                "Rejecting distribution over weights summing to zero"
            );
            return Err(MoneyError::DegenerateWeights {
                parts: weights.len(),
            });
        }

        let mut parts = Vec::with_capacity(weights.len());
        let mut accumulated = 0_i64;

        for units in &weight_units[..leading.len()] {
            let proportion = truncated_ratio(*units, original_total)?;
            let share = self
                .amount
                .checked_mul(proportion)
                .ok_or(MoneyError::overflow("distributed_proportionally"))?;
            let part = Self::new(round_half_even(share, C::MINOR_UNIT_EXPONENT));

            accumulated = accumulated
                .checked_add(part.to_minor_units()?)
                .ok_or(MoneyError::overflow("distributed_proportionally"))?;
            parts.push(part);
        }

        // Last part absorbs the residual
        let residual = desired_total
            .checked_sub(accumulated)
            .ok_or(MoneyError::overflow("distributed_proportionally"))?;
        parts.push(Self::from_minor_units(residual));

        debug!(
            currency = C::CODE,
            desired_total,
            original_total,
            residual,
            parts = parts.len(),
            "Distributed proportionally"
        );

        Ok(parts)
    }
}
