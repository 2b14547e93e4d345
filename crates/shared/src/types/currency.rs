//! Currency catalog.
//!
//! Every supported currency exists twice: as a [`CurrencyDescriptor`] in the
//! static catalog (for lookups by ISO code) and as a zero-sized marker type
//! implementing [`Currency`] (for binding money to a currency at compile time).

use rust_decimal::Decimal;

/// Static metadata for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyDescriptor {
    /// ISO 4217 code (e.g., "USD").
    pub code: &'static str,
    /// Number of fractional digits of the minor unit (2 for USD, 0 for JPY).
    pub minor_unit_exponent: u32,
}

impl CurrencyDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(code: &'static str, minor_unit_exponent: u32) -> Self {
        Self {
            code,
            minor_unit_exponent,
        }
    }

    /// Value of one minor unit (0.01 for USD, 1 for JPY).
    ///
    /// # Panics
    ///
    /// Panics if the exponent exceeds the maximum decimal scale (28).
    #[must_use]
    pub fn minor_unit(&self) -> Decimal {
        Decimal::new(1, self.minor_unit_exponent)
    }

    /// Looks up a catalog currency by ISO code, ignoring ASCII case.
    #[must_use]
    pub fn lookup(code: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|descriptor| descriptor.code.eq_ignore_ascii_case(code))
            .copied()
    }

    /// All catalog currencies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        CATALOG
    }
}

impl std::fmt::Display for CurrencyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for CurrencyDescriptor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("Unknown currency: {s}"))
    }
}

/// A currency bound into a money type.
///
/// Implementors are zero-sized markers; `Money<Usd>` and `Money<Eur>` are
/// distinct types, so mixing currencies does not compile.
pub trait Currency:
    Copy + Clone + Default + PartialEq + Eq + std::hash::Hash + Send + Sync + 'static
{
    /// ISO 4217 code.
    const CODE: &'static str;
    /// Number of fractional digits of the minor unit.
    const MINOR_UNIT_EXPONENT: u32;

    /// Catalog entry for this currency.
    #[must_use]
    fn descriptor() -> CurrencyDescriptor {
        CurrencyDescriptor::new(Self::CODE, Self::MINOR_UNIT_EXPONENT)
    }
}

/// Generates marker types and the lookup catalog from one list.
macro_rules! currencies {
    ($(($name:ident, $code:literal, $exponent:literal, $doc:literal)),* $(,)?) => {
        $(
            #[doc = $doc]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Currency for $name {
                const CODE: &'static str = $code;
                const MINOR_UNIT_EXPONENT: u32 = $exponent;
            }
        )*

        const CATALOG: &[CurrencyDescriptor] = &[
            $(CurrencyDescriptor::new($code, $exponent),)*
        ];
    };
}

currencies!(
    (Usd, "USD", 2, "US Dollar"),
    (Eur, "EUR", 2, "Euro"),
    (Gbp, "GBP", 2, "Pound Sterling"),
    (Chf, "CHF", 2, "Swiss Franc"),
    (Cad, "CAD", 2, "Canadian Dollar"),
    (Aud, "AUD", 2, "Australian Dollar"),
    (Sgd, "SGD", 2, "Singapore Dollar"),
    (Idr, "IDR", 2, "Indonesian Rupiah"),
    (Jpy, "JPY", 0, "Japanese Yen"),
    (Krw, "KRW", 0, "South Korean Won"),
    (Bhd, "BHD", 3, "Bahraini Dinar"),
    (Kwd, "KWD", 3, "Kuwaiti Dinar"),
    (Clf, "CLF", 4, "Unidad de Fomento (Chile)"),
);
