//! Encoding and decoding money under explicit [`CodingOptions`].
//!
//! Every call carries its own options; nothing here reads global state.
//! `Money<C>` implements `Serialize`/`Deserialize` with the default options,
//! which accept both wire forms and emit `{"currency": "USD", "amount": 2.19}`.
//!
//! The JSON helpers return a typed
//! [`CodingError`](coinage_shared::CodingError); inside arbitrary serde formats
//! the same errors surface through `de::Error::custom`.

pub mod decode;
pub mod encode;

pub use decode::Decoder;
pub use encode::Encoder;

use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use coinage_shared::{CodingOptions, CodingResult, Currency};

use crate::money::Money;

/// Encodes `money` into a JSON value.
pub fn to_json_value<C: Currency>(money: &Money<C>, options: CodingOptions) -> CodingResult<Value> {
    Ok(serde_json::to_value(money.encoded(options))?)
}

/// Encodes `money` into a compact JSON string.
pub fn to_json_string<C: Currency>(
    money: &Money<C>,
    options: CodingOptions,
) -> CodingResult<String> {
    Ok(serde_json::to_string(&money.encoded(options))?)
}

/// Decodes money from a JSON value in either wire form.
///
/// # Errors
///
/// - `CodingError::MissingCurrency` for a scalar under `require_explicit_currency`
/// - `CodingError::StringAmountRequired` for a number under `require_string_amount`
/// - `CodingError::CurrencyMismatch` when the code is not `C::CODE`
/// - `CodingError::DataCorrupted` for a missing or unusable field
pub fn from_json_value<C: Currency>(value: &Value, options: CodingOptions) -> CodingResult<Money<C>> {
    decode::decode_value(value, options)
}

/// Decodes money from JSON text.
pub fn from_json_str<C: Currency>(text: &str, options: CodingOptions) -> CodingResult<Money<C>> {
    let value: Value = serde_json::from_str(text)?;
    from_json_value(&value, options)
}

impl<C: Currency> Serialize for Money<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encoded(CodingOptions::default()).serialize(serializer)
    }
}

impl<'de, C: Currency> Deserialize<'de> for Money<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DeserializeSeed::deserialize(Decoder::<C>::new(CodingOptions::default()), deserializer)
    }
}
