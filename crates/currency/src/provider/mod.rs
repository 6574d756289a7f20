//! Rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all rate sources implement
//! - Concrete source implementations (override file, open-data APIs,
//!   a scraped source, and the static fallback table)
//!
//! # Architecture
//!
//! The provider system is designed to be:
//! - **Source-agnostic**: the aggregator only sees the trait
//! - **Extensible**: a new source is a new `RateProvider` impl appended
//!   to the chain
//! - **Resilient**: a source failure is a `None` result, never an error
//!   crossing the provider boundary
//!
//! Providers return partial tables freely; the aggregator fills gaps from
//! lower-priority sources.

mod traits;

// Source implementations
pub mod frankfurter;
pub mod open_er_api;
pub mod override_file;
pub mod static_rates;
pub mod x_rates;

// Re-exports
pub use traits::RateProvider;
