//! Frankfurter API provider (frankfurter.dev).
//!
//! Serves ECB reference rates; the same single-call shape as the primary
//! API but with narrower coverage (no VND, for example), so in practice
//! it fills gaps rather than supplying whole tables. Bases outside the
//! ECB set are rejected upstream with an HTTP error.

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
const PROVIDER_ID: &str = "FRANKFURTER";

const BASE_URL: &str = "https://api.frankfurter.dev/v1/latest";

/// API response from frankfurter.dev
#[derive(Debug, Deserialize)]
struct FrankfurterResponse {
    /// Rates relative to the requested base
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Frankfurter ECB reference-rate provider.
pub struct FrankfurterProvider {
    client: Client,
}

impl FrankfurterProvider {
    /// Create a provider with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    async fn fetch_table(&self, base: &str) -> Result<RateTable, CurrencyError> {
        let response = self
            .client
            .get(BASE_URL)
            .query(&[("base", base)])
            .send()
            .await?
            .error_for_status()?;
        let payload: FrankfurterResponse = response.json().await?;
        table_from_response(payload)
    }
}

fn table_from_response(payload: FrankfurterResponse) -> Result<RateTable, CurrencyError> {
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
impl RateProvider for FrankfurterProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        60
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
