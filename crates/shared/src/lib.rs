//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides common types used across all other crates:
//! - The currency catalog and per-currency marker types
//! - Options for encoding and decoding money
//! - Error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{CodingError, CodingResult, MoneyError, MoneyResult};
pub use types::{CodingOptions, Currency, CurrencyDescriptor};
