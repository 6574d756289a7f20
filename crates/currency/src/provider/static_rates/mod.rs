//! Compiled-in fallback rates.
//!
//! The last provider in the chain. No network dependency, always returns
//! the full table for the stock MYR deployment, which is what guarantees
//! that aggregation never comes back empty and that pricing survives a
//! cold start with every upstream source down. The figures are refreshed
//! by hand when they drift too far; overrides and live sources outrank
//! them whenever available.

use async_trait::async_trait;
use log::debug;

use crate::models::RateTable;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "STATIC_TABLE";

/// The base currency the compiled-in table is denominated in.
const STATIC_BASE: &str = "MYR";

/// Approximate mid-market rates per 1 MYR.
const MYR_RATES: &[(&str, f64)] = &[
    ("USD", 0.2115),
    ("SGD", 0.2871),
    ("EUR", 0.1962),
    ("GBP", 0.1667),
    ("THB", 7.64),
    ("JPY", 33.07),
    ("KRW", 294.6),
    ("IDR", 3437.0),
    ("VND", 5312.0),
];

/// Static fallback provider.
#[derive(Default)]
pub struct StaticRatesProvider;

impl StaticRatesProvider {
    /// Create the fallback provider.
    pub fn new() -> Self {
        Self
    }

    /// The full compiled-in table, also handy as a test fixture.
    pub fn rates() -> RateTable {
        MYR_RATES.iter().copied().collect()
    }
}

#[async_trait]
impl RateProvider for StaticRatesProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        10
    }

    async fn fetch_rates(&self, base: &str) -> Option<RateTable> {
        if base != STATIC_BASE {
            debug!(
                "{}: compiled-in table is {}-based, cannot serve base {}",
                PROVIDER_ID, STATIC_BASE, base
            );
            return None;
        }
        Some(Self::rates())
    }
}
