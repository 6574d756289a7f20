//! Kedai Currency Crate
//!
//! This crate provides multi-source exchange-rate aggregation and localized
//! price display for the Kedai storefront bot. Product prices are stored in
//! a single base currency (MYR by default); everything a buyer sees in
//! another currency goes through this crate.
//!
//! # Overview
//!
//! The currency crate supports:
//! - Multiple independent rate sources: operator overrides, open-data APIs,
//!   a scraped source, and a compiled-in fallback table
//! - Priority-ordered aggregation with gap filling across sources
//! - A shared, time-windowed in-memory rate cache with coalesced refreshes
//! - Per-currency rounding and display formatting rules
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | CurrencyService  |  get_display_price(amount, "IDR")
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  PriceConverter  | --> |    RateCache     |  (fresh? serve : refresh once)
//! +------------------+     +------------------+
//!          |                        |
//!          |                        v
//!          |               +------------------+
//!          |               | ProviderRegistry |  (priority order, first wins)
//!          |               +------------------+
//!          |                        |
//!          |                        v
//!          |               +------------------+
//!          |               |  RateProvider(s) |  (override file, APIs,
//!          |               +------------------+   scraper, static table)
//!          v
//! +------------------+
//! |  format_price    |  "Rp 4.306"
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CurrencyService`] - The surface the rest of the bot calls
//! - [`RateProvider`] - Capability trait implemented by every rate source
//! - [`ProviderRegistry`] - Priority-ordered provider chain and merge logic
//! - [`RateCache`] - Shared cache entry with refresh coalescing
//! - [`RateTable`] - Sanitized code -> rate mapping relative to the base
//! - [`CurrencySpec`] - Static display and rounding metadata per currency

pub mod config;
pub mod convert;
pub mod errors;
pub mod format;
pub mod models;
pub mod provider;
pub mod registry;
pub mod service;

// Re-export the types callers normally need
pub use config::CurrencyConfig;
pub use errors::CurrencyError;
pub use models::{normalize_code, CurrencySpec, RateTable};

pub use provider::frankfurter::FrankfurterProvider;
pub use provider::open_er_api::OpenErApiProvider;
pub use provider::override_file::OverrideFileProvider;
pub use provider::static_rates::StaticRatesProvider;
pub use provider::x_rates::XRatesProvider;
pub use provider::RateProvider;

pub use convert::PriceConverter;
pub use format::format_price;
pub use registry::{ProviderRegistry, RateCache};
pub use service::CurrencyService;
