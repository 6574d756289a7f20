//! Scraping provider for x-rates.com.
//!
//! The site has no JSON API, only a calculator page per currency pair, so
//! this provider issues one request per target currency and scrapes the
//! result element out of each page. Requests run in parallel and every
//! page is handled independently, so one unparseable or timed-out page
//! drops only its own currency.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::errors::CurrencyError;
use crate::models::RateTable;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "X_RATES";

const BASE_URL: &str = "https://www.x-rates.com/calculator/";

/// CSS selector for the converted-amount element on the calculator page.
const RESULT_SELECTOR: &str = "span.ccOutputRslt";

/// Scraping provider for x-rates.com calculator pages.
pub struct XRatesProvider {
    client: Client,
    targets: Vec<String>,
}

impl XRatesProvider {
    /// Create a provider that will scrape one page per target currency.
    pub fn new(timeout: Duration, targets: Vec<String>) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, targets }
    }

    async fn fetch_one(&self, base: &str, target: &str) -> Result<f64, CurrencyError> {
        let url = format!("{}?from={}&to={}&amount=1", BASE_URL, base, target);
        let page = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_rate(&page).ok_or_else(|| CurrencyError::Provider {
            provider: PROVIDER_ID.to_string(),
            message: format!("no parseable rate on page for {}", target),
        })
    }
}

/// Pull the numeric rate out of a calculator page.
///
/// The result element renders as e.g. `0.211514 USD`; large rates carry
/// comma separators that have to be stripped before parsing.
fn parse_rate(page: &str) -> Option<f64> {
    let document = Html::parse_document(page);
    let selector = Selector::parse(RESULT_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    let text: String = element.text().collect();
    let number = text.split_whitespace().next()?.replace(',', "");
    let rate = number.parse::<f64>().ok()?;
    if rate.is_finite() && rate > 0.0 {
        Some(rate)
    } else {
        None
    }
}

#[async_trait]
impl RateProvider for XRatesProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        40
    }

    async fn fetch_rates(&self, base: &str) -> Option<RateTable> {
        let fetches = self
            .targets
            .iter()
            .filter(|target| target.as_str() != base)
            .map(|target| async move { (target.as_str(), self.fetch_one(base, target).await) });

        let mut table = RateTable::new();
        for (target, result) in join_all(fetches).await {
            match result {
                Ok(rate) => {
                    table.insert(target, rate);
                }
                Err(e) => {
                    debug!("{}: {} -> {} failed: {}", PROVIDER_ID, base, target, e);
                }
            }
        }

        if table.is_empty() {
            warn!("{}: no page yielded a rate for base {}", PROVIDER_ID, base);
            None
        } else {
            Some(table)
        }
    }
}
