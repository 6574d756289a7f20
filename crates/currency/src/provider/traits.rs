//! Rate provider trait definition.

use async_trait::async_trait;

use crate::models::RateTable;

/// Trait for exchange-rate sources.
///
/// Implement this trait to add a new source of rates. The registry tries
/// providers in descending priority order and merges their tables, so an
/// implementation only needs to report what it actually managed to fetch.
///
/// # Contract
///
/// - A partial table is a valid result; missing codes are filled from
///   lower-priority sources.
/// - Total failure (network, parse, unsupported base) is `None`. Never
///   panic and never let an error escape; log it and move on so one flaky
///   source cannot take pricing down.
/// - Values must be sanitized before returning: [`RateTable::insert`]
///   already drops non-finite, zero, and negative rates.
/// - Network-backed implementations must bound their own requests with a
///   client timeout so a slow source cannot stall a whole refresh.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this source, used in logs.
    fn id(&self) -> &'static str;

    /// Provider priority for ordering.
    ///
    /// Higher values = more trusted, consulted first. Default is 10.
    fn priority(&self) -> u8 {
        10
    }

    /// Fetch rates relative to the given base currency.
    ///
    /// Returns a possibly partial table, or `None` on total failure.
    async fn fetch_rates(&self, base: &str) -> Option<RateTable>;
}
