//! Provider registry and aggregation.
//!
//! The registry holds every configured rate source sorted by descending
//! priority and merges their tables into one. For each currency the value
//! comes from the most trusted source that supplied it; less trusted
//! sources only fill the gaps the others left.

use std::cmp::Reverse;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::CurrencyConfig;
use crate::models::RateTable;
use crate::provider::frankfurter::FrankfurterProvider;
use crate::provider::open_er_api::OpenErApiProvider;
use crate::provider::override_file::OverrideFileProvider;
use crate::provider::static_rates::StaticRatesProvider;
use crate::provider::x_rates::XRatesProvider;
use crate::provider::RateProvider;

/// Priority-ordered chain of rate sources.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn RateProvider>>,
}

impl ProviderRegistry {
    /// Create a registry from an arbitrary set of providers.
    ///
    /// Providers are sorted by descending priority once, here; ties keep
    /// their given order.
    pub fn with_providers(mut providers: Vec<Arc<dyn RateProvider>>) -> Self {
        providers.sort_by_key(|provider| Reverse(provider.priority()));
        Self { providers }
    }

    /// The standard storefront chain: operator overrides, two open-data
    /// APIs, the scraped source, and the compiled-in fallback.
    pub fn default_chain(config: &CurrencyConfig) -> Self {
        Self::with_providers(vec![
            Arc::new(OverrideFileProvider::new(config.override_path.clone())),
            Arc::new(OpenErApiProvider::new(config.http_timeout)),
            Arc::new(FrankfurterProvider::new(config.http_timeout)),
            Arc::new(XRatesProvider::new(
                config.http_timeout,
                config.display_currencies.clone(),
            )),
            Arc::new(StaticRatesProvider::new()),
        ])
    }

    /// The registered providers, most trusted first.
    pub fn providers(&self) -> &[Arc<dyn RateProvider>] {
        &self.providers
    }

    /// Aggregate a rate table for `base` from the provider chain.
    ///
    /// Sources are tried in priority order; a source that fails is logged
    /// and skipped. Merging never overwrites, so the first source to
    /// supply a currency wins. Once every required currency is present
    /// the remaining sources are not consulted. A currency no source can
    /// supply is simply absent from the result.
    pub async fn resolve(&self, base: &str, required: &[String]) -> RateTable {
        let mut table = RateTable::new();
        table.insert(base, 1.0);

        for provider in &self.providers {
            if all_present(&table, required) {
                break;
            }

            match provider.fetch_rates(base).await {
                Some(rates) => {
                    let added = table.merge_missing(&rates);
                    debug!(
                        "provider '{}' contributed {} of {} rate(s)",
                        provider.id(),
                        added,
                        rates.len()
                    );
                }
                None => {
                    warn!(
                        "provider '{}' returned no rates for base {}, trying next source",
                        provider.id(),
                        base
                    );
                }
            }
        }

        let missing: Vec<&String> = required
            .iter()
            .filter(|code| !table.contains(code))
            .collect();
        if !missing.is_empty() {
            warn!("no source could supply rates for {:?}", missing);
        }

        table
    }
}

fn all_present(table: &RateTable, required: &[String]) -> bool {
    !required.is_empty() && required.iter().all(|code| table.contains(code))
}
