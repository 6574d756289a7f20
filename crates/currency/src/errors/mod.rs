//! Error types for the currency crate.
//!
//! Rate sources never surface errors to their callers: every provider
//! converts its own failures into a `None` result so the chain keeps going.
//! [`CurrencyError`] is what escapes the crate, and what providers use
//! internally before swallowing.

use thiserror::Error;

/// Errors that can occur during conversion or rate fetching.
#[derive(Error, Debug)]
pub enum CurrencyError {
    /// The currency code was empty or otherwise unusable.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// No source, including the static fallback, supplied a rate for this
    /// currency. The caller should show the base-currency price instead.
    #[error("Rate unavailable for {0}")]
    RateUnavailable(String),

    /// A source returned an unusable payload. Recovered inside the
    /// provider; only ever seen in logs.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The source that produced the bad payload
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// A network error occurred while talking to a source. Recovered
    /// inside the provider; only ever seen in logs.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
