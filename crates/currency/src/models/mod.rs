//! Currency data models
//!
//! This module contains the core data types for rate aggregation:
//! - `types` - Code normalization and the provider id alias
//! - `rates` - The sanitized `RateTable` mapping
//! - `currency_spec` - Static display and rounding metadata per currency

mod currency_spec;
mod rates;
mod types;

pub use currency_spec::{is_zero_decimal, known_codes, spec_for, CurrencySpec};
pub use rates::RateTable;
pub use types::{normalize_code, ProviderId};
