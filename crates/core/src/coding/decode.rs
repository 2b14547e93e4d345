//! Money decoder.
//!
//! Accepts both wire forms:
//! - Scalar: `2.19` or `"2.19"`
//! - Structured: `{"currency": "USD", "amount": "2.19"}`
//!
//! Unknown fields of the structured form are ignored.

use std::fmt;
use std::marker::PhantomData;

use rust_decimal::Decimal;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use coinage_shared::{CodingError, CodingOptions, CodingResult, Currency, MoneyError};

use crate::money::Money;
use crate::money::rounding::decimal_from_f64;

/// Decodes `Money<C>` under a set of options.
///
/// Implements [`DeserializeSeed`], so it plugs into any serde format:
///
/// ```
/// use serde::de::DeserializeSeed;
/// use coinage_core::coding::Decoder;
/// use coinage_core::{CodingOptions, Money, Usd};
///
/// let mut json = serde_json::Deserializer::from_str(r#"{"currency":"USD","amount":"2.19"}"#);
/// let money = Decoder::<Usd>::new(CodingOptions::strict()).deserialize(&mut json).unwrap();
/// assert_eq!(money, "2.19".parse::<Money<Usd>>().unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decoder<C: Currency> {
    options: CodingOptions,
    currency: PhantomData<C>,
}

impl<C: Currency> Decoder<C> {
    /// Creates a decoder for `options`.
    #[must_use]
    pub const fn new(options: CodingOptions) -> Self {
        Self {
            options,
            currency: PhantomData,
        }
    }
}

impl<'de, C: Currency> DeserializeSeed<'de> for Decoder<C> {
    type Value = Money<C>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Money<C>, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Currency,
    Amount,
    #[serde(other)]
    Other,
}

impl<'de, C: Currency> Visitor<'de> for Decoder<C> {
    type Value = Money<C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "a {} amount or a {{currency, amount}} object",
            C::CODE
        )
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Money<C>, E> {
        decode_scalar(RawAmount::Text(value), self.options).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Money<C>, E> {
        decode_scalar(RawAmount::Float(value), self.options).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Money<C>, E> {
        decode_scalar(RawAmount::Integer(Decimal::from(value)), self.options).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Money<C>, E> {
        decode_scalar(RawAmount::Integer(Decimal::from(value)), self.options).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Money<C>, E> {
        decode_scalar(RawAmount::Unusable("a boolean"), self.options).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Money<C>, E> {
        decode_scalar(RawAmount::Unusable("null"), self.options).map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<Money<C>, E> {
        self.visit_unit()
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Money<C>, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        decode_scalar(RawAmount::Unusable("an array"), self.options).map_err(de::Error::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Money<C>, A::Error> {
        let mut currency: Option<Value> = None;
        let mut amount: Option<Value> = None;

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Currency => {
                    if currency.is_some() {
                        return Err(de::Error::duplicate_field("currency"));
                    }
                    currency = Some(map.next_value()?);
                }
                Field::Amount => {
                    if amount.is_some() {
                        return Err(de::Error::duplicate_field("amount"));
                    }
                    amount = Some(map.next_value()?);
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        decode_structured(currency.as_ref(), amount.as_ref(), self.options)
            .map_err(de::Error::custom)
    }
}

/// An amount as it appeared on the wire, before any option is applied.
#[derive(Debug, Clone, Copy)]
enum RawAmount<'a> {
    Text(&'a str),
    Float(f64),
    Integer(Decimal),
    Unusable(&'static str),
}

impl<'a> RawAmount<'a> {
    fn from_value(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(number) => number
                .as_i64()
                .map(Decimal::from)
                .or_else(|| number.as_u64().map(Decimal::from))
                .map_or_else(
                    || Self::Float(number.as_f64().unwrap_or(f64::NAN)),
                    Self::Integer,
                ),
            other => Self::Unusable(describe(other)),
        }
    }

    const fn is_numeric(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Integer(_))
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes a JSON value in either wire form.
pub(crate) fn decode_value<C: Currency>(
    value: &Value,
    options: CodingOptions,
) -> CodingResult<Money<C>> {
    match value {
        Value::Object(fields) => {
            decode_structured(fields.get("currency"), fields.get("amount"), options)
        }
        scalar => decode_scalar(RawAmount::from_value(scalar), options),
    }
}

fn decode_scalar<C: Currency>(
    amount: RawAmount<'_>,
    options: CodingOptions,
) -> CodingResult<Money<C>> {
    if options.require_explicit_currency {
        return Err(CodingError::MissingCurrency);
    }
    decode_amount(amount, "amount", options)
}

fn decode_structured<C: Currency>(
    currency: Option<&Value>,
    amount: Option<&Value>,
    options: CodingOptions,
) -> CodingResult<Money<C>> {
    let code = match currency {
        Some(Value::String(code)) => code,
        Some(other) => {
            return Err(CodingError::corrupted(
                "currency",
                format!("expected a currency code, found {}", describe(other)),
            ));
        }
        None => return Err(CodingError::corrupted("currency", "missing field")),
    };

    if code != C::CODE {
        return Err(CodingError::CurrencyMismatch {
            expected: C::CODE,
            found: code.clone(),
        });
    }

    let amount = amount.ok_or_else(|| CodingError::corrupted("amount", "missing field"))?;
    decode_amount(RawAmount::from_value(amount), "amount", options)
}

fn decode_amount<C: Currency>(
    amount: RawAmount<'_>,
    field: &'static str,
    options: CodingOptions,
) -> CodingResult<Money<C>> {
    if options.require_string_amount && amount.is_numeric() {
        return Err(CodingError::StringAmountRequired { field });
    }

    let money = match amount {
        RawAmount::Text(text) => {
            return text
                .parse()
                .map_err(|err: MoneyError| CodingError::corrupted(field, err.to_string()));
        }
        RawAmount::Float(value) => Money::new(
            decimal_from_f64(value).map_err(|err| CodingError::corrupted(field, err.to_string()))?,
        ),
        RawAmount::Integer(value) => Money::new(value),
        RawAmount::Unusable(kind) => {
            return Err(CodingError::corrupted(
                field,
                format!("expected a decimal string or number, found {kind}"),
            ));
        }
    };

    if options.round_floating_point_amount {
        Ok(money.rounded())
    } else {
        Ok(money)
    }
}
