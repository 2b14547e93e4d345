//! Money bound to a currency at compile time.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `Money<C>` wraps `rust_decimal::Decimal`; the currency is the type
//! parameter `C`, so `Money<Usd> + Money<Eur>` does not compile.

pub mod arithmetic;
pub mod distribution;
pub mod rounding;

#[cfg(test)]
mod props;

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::str::FromStr;

use rust_decimal::Decimal;

use coinage_shared::{Currency, CurrencyDescriptor, MoneyError, MoneyResult};

use rounding::{decimal_from_f32, decimal_from_f64, round_half_even};

/// A monetary amount in currency `C`.
///
/// The amount is exact and is only rounded to the currency's minor unit when
/// asked to (`rounded`, `to_minor_units`) or when a binary float is involved.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Money<C: Currency> {
    amount: Decimal,
    currency: PhantomData<C>,
}

impl<C: Currency> Money<C> {
    /// Creates money holding `amount` verbatim. No rounding is performed.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: PhantomData,
        }
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Creates money from a count of minor units (`2` → `0.02 USD`).
    ///
    /// # Panics
    ///
    /// Panics if the currency's minor-unit exponent exceeds the maximum
    /// decimal scale (28). No catalog currency does.
    #[must_use]
    pub fn from_minor_units(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, C::MINOR_UNIT_EXPONENT))
    }

    /// Creates money from a binary float, rounded to the minor unit.
    ///
    /// A float cannot be trusted below currency precision, so the nearest
    /// decimal is always rounded half-to-even.
    pub fn from_f64(value: f64) -> MoneyResult<Self> {
        Ok(Self::new(decimal_from_f64(value)?).rounded())
    }

    /// Parses a decimal literal, returning `None` if the text is not one.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Catalog entry for this money's currency.
    #[must_use]
    pub fn currency(&self) -> CurrencyDescriptor {
        C::descriptor()
    }

    /// Money worth one minor unit (`0.01 USD`, `1 JPY`).
    #[must_use]
    pub fn minor_unit() -> Self {
        Self::from_minor_units(1)
    }

    /// Integer count of minor units, rounded half-to-even.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the count does not fit an `i64`.
    pub fn to_minor_units(&self) -> MoneyResult<i64> {
        let rounded = round_half_even(self.amount, C::MINOR_UNIT_EXPONENT);
        let shift = C::MINOR_UNIT_EXPONENT.saturating_sub(rounded.scale());

        10_i128
            .checked_pow(shift)
            .and_then(|factor| rounded.mantissa().checked_mul(factor))
            .and_then(|units| i64::try_from(units).ok())
            .ok_or(MoneyError::overflow("to_minor_units"))
    }

    /// Returns a copy rounded half-to-even to the minor unit.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self::new(round_half_even(self.amount, C::MINOR_UNIT_EXPONENT))
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs())
    }
}

impl<C: Currency> From<Decimal> for Money<C> {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl<C: Currency> From<$int> for Money<C> {
                fn from(value: $int) -> Self {
                    Self::new(Decimal::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl<C: Currency> TryFrom<f64> for Money<C> {
    type Error = MoneyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl<C: Currency> TryFrom<f32> for Money<C> {
    type Error = MoneyError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Ok(Self::new(decimal_from_f32(value)?).rounded())
    }
}

impl<C: Currency> FromStr for Money<C> {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str_exact(s)
        };

        parsed.map(Self::new).map_err(|_| MoneyError::Parse {
            input: s.to_string(),
        })
    }
}

impl<C: Currency> PartialOrd for Money<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Currency> Ord for Money<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl<C: Currency> fmt::Display for Money<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)
    }
}

impl<C: Currency> fmt::Debug for Money<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", C::CODE, self.amount)
    }
}

impl<C: Currency> Sum for Money<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, money| acc + money)
    }
}

impl<'a, C: Currency> Sum<&'a Money<C>> for Money<C> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
