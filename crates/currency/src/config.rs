//! Configuration for the currency subsystem.

use std::path::PathBuf;
use std::time::Duration;

use crate::models::known_codes;

/// The currency all stored prices are denominated in.
pub const DEFAULT_BASE_CURRENCY: &str = "MYR";

/// How long an aggregated rate table stays fresh.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Per-request timeout applied by every network source.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(8);

/// Default location of the operator override file.
pub const DEFAULT_OVERRIDE_FILE: &str = "rate_overrides.json";

/// Currency subsystem configuration.
///
/// The defaults describe the stock MYR storefront; deployments normally
/// only touch `override_path`.
#[derive(Clone, Debug)]
pub struct CurrencyConfig {
    /// Base currency code.
    pub base_currency: String,
    /// Currencies offered in the buyer-facing currency menu.
    pub display_currencies: Vec<String>,
    /// Cache freshness window.
    pub refresh_interval: Duration,
    /// Operator override file, read fresh on every refresh.
    pub override_path: PathBuf,
    /// Timeout for each upstream request.
    pub http_timeout: Duration,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            display_currencies: known_codes()
                .filter(|code| *code != DEFAULT_BASE_CURRENCY)
                .map(String::from)
                .collect(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            override_path: PathBuf::from(DEFAULT_OVERRIDE_FILE),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CurrencyConfig::default();
        assert_eq!(config.base_currency, "MYR");
        assert!(!config.display_currencies.contains(&"MYR".to_string()));
        assert!(config.display_currencies.contains(&"IDR".to_string()));
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
    }
}
