//! Money encoder.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};

use coinage_shared::{CodingOptions, Currency};

use crate::money::Money;

/// Serializable view of a money value under a set of options.
///
/// Produced by [`Money::encoded`].
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a, C: Currency> {
    money: &'a Money<C>,
    options: CodingOptions,
}

impl<C: Currency> Money<C> {
    /// Returns a serializable view of this value encoded under `options`.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use coinage_core::{CodingOptions, Money, Usd};
    ///
    /// let price = Money::<Usd>::new(dec!(2.19));
    /// let options = CodingOptions::default().encode_amount_as_string(true);
    /// let json = serde_json::to_string(&price.encoded(options)).unwrap();
    /// assert_eq!(json, r#"{"currency":"USD","amount":"2.19"}"#);
    /// ```
    #[must_use]
    pub const fn encoded(&self, options: CodingOptions) -> Encoder<'_, C> {
        Encoder {
            money: self,
            options,
        }
    }
}

impl<C: Currency> Serialize for Encoder<'_, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = Amount {
            value: self.money.amount(),
            as_string: self.options.encode_amount_as_string,
        };

        if self.options.omit_currency {
            return amount.serialize(serializer);
        }

        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("currency", C::CODE)?;
        state.serialize_field("amount", &amount)?;
        state.end()
    }
}

/// The amount field: exact decimal text, or the nearest native number.
struct Amount {
    value: Decimal,
    as_string: bool,
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.as_string {
            return serializer.collect_str(&self.value);
        }

        let normalized = self.value.normalize();
        if normalized.scale() == 0
            && let Some(integer) = normalized.to_i64()
        {
            return serializer.serialize_i64(integer);
        }

        // Parsed from the decimal text so the float is the closest one
        let number = f64::from_str(&normalized.to_string()).map_err(S::Error::custom)?;
        serializer.serialize_f64(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_shared::types::{Bhd, Jpy, Usd};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn encode<C: Currency>(money: Money<C>, options: CodingOptions) -> String {
        serde_json::to_string(&money.encoded(options)).unwrap()
    }

    #[rstest]
    #[case(dec!(2.19), r#"{"currency":"USD","amount":2.19}"#)]
    #[case(dec!(10.00), r#"{"currency":"USD","amount":10}"#)]
    #[case(dec!(-0.5), r#"{"currency":"USD","amount":-0.5}"#)]
    #[case(dec!(0), r#"{"currency":"USD","amount":0}"#)]
    fn test_default_encoding_is_structured_numeric(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(encode(Money::<Usd>::new(amount), CodingOptions::default()), expected);
    }

    #[test]
    fn test_string_amount_keeps_exact_text() {
        let options = CodingOptions::default().encode_amount_as_string(true);
        assert_eq!(
            encode(Money::<Usd>::new(dec!(36.530)), options),
            r#"{"currency":"USD","amount":"36.530"}"#
        );
        assert_eq!(
            encode(Money::<Bhd>::new(dec!(-1.125)), options),
            r#"{"currency":"BHD","amount":"-1.125"}"#
        );
    }

    #[test]
    fn test_omit_currency_emits_scalar() {
        let options = CodingOptions::default().omit_currency(true);
        assert_eq!(encode(Money::<Usd>::new(dec!(2.19)), options), "2.19");
        assert_eq!(encode(Money::<Jpy>::new(dec!(500)), options), "500");
        assert_eq!(
            encode(
                Money::<Usd>::new(dec!(2.19)),
                options.encode_amount_as_string(true)
            ),
            r#""2.19""#
        );
    }

    #[test]
    fn test_strict_options_encode_string_structured() {
        assert_eq!(
            encode(Money::<Usd>::new(dec!(0.02)), CodingOptions::strict()),
            r#"{"currency":"USD","amount":"0.02"}"#
        );
    }

    #[test]
    fn test_large_integer_falls_back_to_float() {
        let huge = Money::<Usd>::new(Decimal::MAX);
        let value = serde_json::to_value(huge.encoded(CodingOptions::default())).unwrap();
        assert!(value["amount"].is_f64());
    }
}
