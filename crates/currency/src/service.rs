//! The storefront-facing currency service.
//!
//! Everything outside this crate asks for prices through
//! [`CurrencyService`]; the provider chain, cache, converter, and
//! formatter stay internal. The service never returns an error for a
//! display price: when no rate exists it falls back to the base-currency
//! amount with an annotation, so a buyer never sees a broken string.

use std::sync::Arc;

use log::warn;
use rust_decimal::Decimal;

use crate::config::CurrencyConfig;
use crate::convert::PriceConverter;
use crate::errors::CurrencyError;
use crate::format::format_price;
use crate::models::{normalize_code, RateTable};
use crate::registry::{ProviderRegistry, RateCache};

/// Appended to a base-currency fallback price.
const RATE_UNAVAILABLE_SUFFIX: &str = " (rate unavailable)";

/// The currency subsystem's single consumer surface.
pub struct CurrencyService {
    base: String,
    supported: Vec<String>,
    cache: Arc<RateCache>,
    converter: PriceConverter,
}

impl CurrencyService {
    /// Create a service with the standard provider chain.
    pub fn new(config: CurrencyConfig) -> Self {
        let registry = ProviderRegistry::default_chain(&config);
        Self::with_registry(config, registry)
    }

    /// Create a service over a custom provider chain.
    pub fn with_registry(config: CurrencyConfig, registry: ProviderRegistry) -> Self {
        let base = normalize_code(&config.base_currency)
            .unwrap_or_else(|| crate::config::DEFAULT_BASE_CURRENCY.to_string());
        let supported: Vec<String> = config
            .display_currencies
            .iter()
            .filter_map(|code| normalize_code(code))
            .collect();

        let cache = Arc::new(RateCache::new(
            registry,
            base.clone(),
            supported.clone(),
            config.refresh_interval,
        ));
        let converter = PriceConverter::new(base.clone(), cache.clone());

        Self {
            base,
            supported,
            cache,
            converter,
        }
    }

    /// Render a stored base-currency amount as a display price in the
    /// buyer's currency.
    ///
    /// Never fails: an unknown or unavailable currency degrades to the
    /// base-currency price annotated with
    /// `" (rate unavailable)"`.
    pub async fn get_display_price(&self, base_amount: Decimal, target: &str) -> String {
        match self.converter.convert(base_amount, target).await {
            Ok(amount) => {
                let code = normalize_code(target).unwrap_or_else(|| self.base.clone());
                format_price(amount, &code)
            }
            Err(e) => {
                warn!(
                    "display price fell back to {} for target {:?}: {}",
                    self.base, target, e
                );
                format!(
                    "{}{}",
                    format_price(base_amount, &self.base),
                    RATE_UNAVAILABLE_SUFFIX
                )
            }
        }
    }

    /// Convert a base-currency amount, keeping the number.
    ///
    /// For callers that do arithmetic on the result (order totals); the
    /// per-currency rounding rules are already applied.
    pub async fn convert(&self, amount: Decimal, target: &str) -> Result<Decimal, CurrencyError> {
        self.converter.convert(amount, target).await
    }

    /// Drop the cached table and aggregate a fresh one now.
    pub async fn refresh_rates(&self) -> Arc<RateTable> {
        self.cache.force_refresh().await
    }

    /// The base currency code.
    pub fn base_currency(&self) -> &str {
        &self.base
    }

    /// The currencies offered in the buyer-facing menu.
    pub fn supported_currencies(&self) -> &[String] {
        &self.supported
    }
}
