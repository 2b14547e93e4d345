//! Common types used across the workspace.

pub mod currency;
pub mod options;

pub use currency::*;
pub use options::CodingOptions;
