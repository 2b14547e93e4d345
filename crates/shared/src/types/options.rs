//! Options controlling how money is encoded and decoded.

use serde::Deserialize;

/// Independent toggles for the money encoder and decoder.
///
/// Passed explicitly to every encode/decode call; the default has every
/// toggle off, which accepts every representation and encodes the
/// structured form with a numeric amount.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct CodingOptions {
    /// Reject bare scalar encodings; require `{currency, amount}`.
    pub require_explicit_currency: bool,
    /// Reject numeric amounts; require the amount as a decimal string.
    pub require_string_amount: bool,
    /// Round accepted numeric amounts to the currency's minor unit.
    pub round_floating_point_amount: bool,
    /// Encode only the amount, without the currency code.
    pub omit_currency: bool,
    /// Encode the amount as its exact decimal string.
    pub encode_amount_as_string: bool,
}

impl CodingOptions {
    /// Options that only accept and produce `{currency, amount}` with string
    /// amounts.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            require_explicit_currency: true,
            require_string_amount: true,
            round_floating_point_amount: false,
            omit_currency: false,
            encode_amount_as_string: true,
        }
    }

    /// Sets `require_explicit_currency`.
    #[must_use]
    pub const fn require_explicit_currency(mut self, value: bool) -> Self {
        self.require_explicit_currency = value;
        self
    }

    /// Sets `require_string_amount`.
    #[must_use]
    pub const fn require_string_amount(mut self, value: bool) -> Self {
        self.require_string_amount = value;
        self
    }

    /// Sets `round_floating_point_amount`.
    #[must_use]
    pub const fn round_floating_point_amount(mut self, value: bool) -> Self {
        self.round_floating_point_amount = value;
        self
    }

    /// Sets `omit_currency`.
    #[must_use]
    pub const fn omit_currency(mut self, value: bool) -> Self {
        self.omit_currency = value;
        self
    }

    /// Sets `encode_amount_as_string`.
    #[must_use]
    pub const fn encode_amount_as_string(mut self, value: bool) -> Self {
        self.encode_amount_as_string = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let options = CodingOptions::default();
        assert!(!options.require_explicit_currency);
        assert!(!options.require_string_amount);
        assert!(!options.round_floating_point_amount);
        assert!(!options.omit_currency);
        assert!(!options.encode_amount_as_string);
    }

    #[test]
    fn test_setters_are_independent() {
        let options = CodingOptions::default()
            .omit_currency(true)
            .encode_amount_as_string(true);
        assert!(options.omit_currency);
        assert!(options.encode_amount_as_string);
        assert!(!options.require_string_amount);

        let options = options.omit_currency(false);
        assert!(!options.omit_currency);
        assert!(options.encode_amount_as_string);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: CodingOptions =
            serde_json::from_str(r#"{"require_string_amount": true}"#).unwrap();
        assert_eq!(options, CodingOptions::default().require_string_amount(true));
    }
}
