//! Core money logic for Coinage.
//!
//! This crate contains pure value types with ZERO I/O or configuration reads.
//! Amounts are exact decimals bound to a currency at compile time.
//!
//! # Modules
//!
//! - `money` - `Money<C>`, arithmetic, rounding, and exact distribution
//! - `coding` - Encoding and decoding money under explicit options
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use coinage_core::{Money, Usd};
//!
//! let subtotal: Money<Usd> = ["2.19", "5.39", "20.99"]
//!     .iter()
//!     .map(|price| price.parse::<Money<Usd>>().unwrap())
//!     .sum();
//! let tax = subtotal * 0.08_f64;
//! assert_eq!(tax, Money::new(dec!(2.29)));
//! ```

pub mod coding;
pub mod money;

pub use coinage_shared::types::currency::*;
pub use coinage_shared::{CodingError, CodingOptions, CodingResult, MoneyError, MoneyResult};
pub use money::Money;
