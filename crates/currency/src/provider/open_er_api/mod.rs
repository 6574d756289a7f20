//! Open Exchange Rates API provider (open.er-api.com).
//!
//! A single call returns a complete daily table for the requested base.
//! This is the primary network source; the free endpoint needs no key.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::errors::CurrencyError;
use crate::models::RateTable;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "OPEN_ER_API";

const BASE_URL: &str = "https://open.er-api.com/v6/latest";

/// API response from open.er-api.com
#[derive(Debug, Deserialize)]
struct OpenErApiResponse {
    /// "success" on a usable payload
    result: String,
    /// Rates relative to the requested base
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Open Exchange Rates API provider.
pub struct OpenErApiProvider {
    client: Client,
}

impl OpenErApiProvider {
    /// Create a provider with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    async fn fetch_table(&self, base: &str) -> Result<RateTable, CurrencyError> {
        let url = format!("{}/{}", BASE_URL, base);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let payload: OpenErApiResponse = response.json().await?;
        table_from_response(payload)
    }
}

fn table_from_response(payload: OpenErApiResponse) -> Result<RateTable, CurrencyError> {
    if payload.result != "success" {
        return Err(CurrencyError::Provider {
            provider: PROVIDER_ID.to_string(),
            message: format!("unexpected result '{}'", payload.result),
        });
    }

    let mut table = RateTable::new();
    for (code, rate) in payload.rates {
        if !table.insert(&code, rate) {
            debug!("{}: dropping unusable rate {}={}", PROVIDER_ID, code, rate);
        }
    }

    if table.is_empty() {
        return Err(CurrencyError::Provider {
            provider: PROVIDER_ID.to_string(),
            message: "payload contained no usable rates".to_string(),
        });
    }

    Ok(table)
}

#[async_trait]
impl RateProvider for OpenErApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        80
    }

    async fn fetch_rates(&self, base: &str) -> Option<RateTable> {
        match self.fetch_table(base).await {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("{}: fetch for base {} failed: {}", PROVIDER_ID, base, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_success_payload() {
        let payload: OpenErApiResponse = serde_json::from_str(
            r#"{
                "result": "success",
                "base_code": "MYR",
                "rates": {"MYR": 1.0, "USD": 0.2115, "IDR": 3437.2}
            }"#,
        )
        .unwrap();

        let table = table_from_response(payload).unwrap();
        assert_eq!(table.get("USD"), Some(0.2115));
        assert_eq!(table.get("IDR"), Some(3437.2));
    }

    #[test]
    fn test_error_result_is_rejected() {
        let payload: OpenErApiResponse =
            serde_json::from_str(r#"{"result": "error", "error-type": "unsupported-code"}"#)
                .unwrap();

        assert!(matches!(
            table_from_response(payload),
            Err(CurrencyError::Provider { .. })
        ));
    }

    #[test]
    fn test_bad_values_are_dropped() {
        let payload: OpenErApiResponse = serde_json::from_str(
            r#"{"result": "success", "rates": {"USD": 0.21, "SGD": 0.0, "EUR": -3.0}}"#,
        )
        .unwrap();

        let table = table_from_response(payload).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains("USD"));
    }

    #[test]
    fn test_all_bad_values_is_an_error() {
        let payload: OpenErApiResponse =
            serde_json::from_str(r#"{"result": "success", "rates": {"USD": 0.0}}"#).unwrap();

        assert!(table_from_response(payload).is_err());
    }
}
