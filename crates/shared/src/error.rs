//! Error types for money operations and money coding.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Result type alias using `CodingError`.
pub type CodingResult<T> = Result<T, CodingError>;

/// Recoverable failures of money construction, conversion, and distribution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Text is not a valid decimal number.
    #[error("Invalid decimal amount: {input:?}")]
    Parse {
        /// The rejected text.
        input: String,
    },

    /// Result does not fit the decimal range or the 64-bit minor-unit range.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Operation that overflowed.
        operation: &'static str,
    },

    /// Floating-point input was NaN or infinite.
    #[error("Non-finite floating-point value: {value}")]
    NonFinite {
        /// Rendering of the rejected value.
        value: String,
    },

    /// Proportional split over weights whose minor units sum to zero.
    #[error("Cannot distribute a non-zero amount over {parts} weights summing to zero")]
    DegenerateWeights {
        /// Number of weights supplied.
        parts: usize,
    },
}

impl MoneyError {
    /// Shorthand for an overflow in `operation`.
    #[must_use]
    pub const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Returns a stable machine-readable code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "PARSE_ERROR",
            Self::Overflow { .. } => "OVERFLOW",
            Self::NonFinite { .. } => "NON_FINITE",
            Self::DegenerateWeights { .. } => "DEGENERATE_WEIGHTS",
        }
    }
}

/// Failures of encoding or decoding money.
#[derive(Debug, Error)]
pub enum CodingError {
    /// Structured form names a currency other than the bound one.
    #[error("Currency mismatch: expected {expected}, got {found}")]
    CurrencyMismatch {
        /// Currency the value is bound to.
        expected: &'static str,
        /// Currency found in the input.
        found: String,
    },

    /// Scalar encoding given while an explicit currency is required.
    #[error("Explicit currency required, found a bare amount")]
    MissingCurrency,

    /// Numeric amount given while a string amount is required.
    #[error("String amount required for field `{field}`")]
    StringAmountRequired {
        /// Offending field.
        field: &'static str,
    },

    /// A field is missing or holds an unusable value.
    #[error("Data corrupted at field `{field}`: {reason}")]
    DataCorrupted {
        /// Offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Underlying JSON failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodingError {
    /// Shorthand for a corrupted `field`.
    pub fn corrupted(field: &'static str, reason: impl Into<String>) -> Self {
        Self::DataCorrupted {
            field,
            reason: reason.into(),
        }
    }

    /// Returns a stable machine-readable code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::MissingCurrency => "MISSING_CURRENCY",
            Self::StringAmountRequired { .. } => "STRING_AMOUNT_REQUIRED",
            Self::DataCorrupted { .. } => "DATA_CORRUPTED",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}
