//! Operators on money.
//!
//! Addition, subtraction, negation, and multiplication by a `Decimal` are
//! exact. Multiplication by a binary float or an integer rounds the product
//! half-to-even to the minor unit, since such scalars cannot carry
//! sub-minor-unit precision reliably.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rust_decimal::Decimal;

use coinage_shared::{Currency, MoneyError, MoneyResult};

use super::Money;
use super::rounding::{decimal_from_f32, decimal_from_f64, round_half_even};

impl<C: Currency> Money<C> {
    /// Overflow-checked addition.
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        self.amount
            .checked_add(rhs.amount)
            .map(Self::new)
            .ok_or(MoneyError::overflow("add"))
    }

    /// Overflow-checked subtraction.
    pub fn checked_sub(self, rhs: Self) -> MoneyResult<Self> {
        self.amount
            .checked_sub(rhs.amount)
            .map(Self::new)
            .ok_or(MoneyError::overflow("sub"))
    }

    /// Overflow-checked exact multiplication.
    pub fn checked_mul(self, scalar: Decimal) -> MoneyResult<Self> {
        self.amount
            .checked_mul(scalar)
            .map(Self::new)
            .ok_or(MoneyError::overflow("mul"))
    }

    /// Multiplies by a binary float and rounds to the minor unit.
    ///
    /// # Errors
    ///
    /// Fails on a non-finite scalar or an overflowing product.
    pub fn try_mul_f64(self, scalar: f64) -> MoneyResult<Self> {
        self.mul_rounded(decimal_from_f64(scalar)?)
    }

    /// Multiplies by a decimal scalar and rounds to the minor unit.
    fn mul_rounded(self, scalar: Decimal) -> MoneyResult<Self> {
        self.checked_mul(scalar)
            .map(|product| Self::new(round_half_even(product.amount, C::MINOR_UNIT_EXPONENT)))
    }

    fn mul_rounded_or_panic(self, scalar: MoneyResult<Decimal>) -> Self {
        match scalar.and_then(|scalar| self.mul_rounded(scalar)) {
            Ok(product) => product,
            Err(err) => panic!("invalid money multiplication: {err}"),
        }
    }
}

impl<C: Currency> Add for Money<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount)
    }
}

impl<C: Currency> Sub for Money<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.amount - rhs.amount)
    }
}

impl<C: Currency> Neg for Money<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl<C: Currency> AddAssign for Money<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Currency> SubAssign for Money<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Currency> Mul<Decimal> for Money<C> {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self::new(self.amount * rhs)
    }
}

impl<C: Currency> Mul<Money<C>> for Decimal {
    type Output = Money<C>;

    fn mul(self, rhs: Money<C>) -> Money<C> {
        rhs * self
    }
}

impl<C: Currency> MulAssign<Decimal> for Money<C> {
    fn mul_assign(&mut self, rhs: Decimal) {
        *self = *self * rhs;
    }
}

#[allow(clippy::unnecessary_wraps)]
fn exact_decimal(value: impl Into<Decimal>) -> MoneyResult<Decimal> {
    Ok(value.into())
}

/// Rounded multiplication by a primitive scalar, in both operand orders.
///
/// # Panics
///
/// A non-finite float scalar or an overflowing product panics; use
/// [`Money::try_mul_f64`] or [`Money::checked_mul`] to handle those.
macro_rules! impl_rounded_mul {
    ($($scalar:ty => $convert:expr),* $(,)?) => {
        $(
            impl<C: Currency> Mul<$scalar> for Money<C> {
                type Output = Self;

                fn mul(self, rhs: $scalar) -> Self {
                    self.mul_rounded_or_panic($convert(rhs))
                }
            }

            impl<C: Currency> Mul<Money<C>> for $scalar {
                type Output = Money<C>;

                fn mul(self, rhs: Money<C>) -> Money<C> {
                    rhs * self
                }
            }

            impl<C: Currency> MulAssign<$scalar> for Money<C> {
                fn mul_assign(&mut self, rhs: $scalar) {
                    *self = *self * rhs;
                }
            }
        )*
    };
}

impl_rounded_mul!(
    f64 => decimal_from_f64,
    f32 => decimal_from_f32,
    i32 => exact_decimal,
    i64 => exact_decimal,
    u32 => exact_decimal,
);
