//! Shared time-windowed cache over the aggregated rate table.
//!
//! One entry for the whole process: every conversion inside the freshness
//! window reads the same table, so request bursts do not fan out into
//! duplicate upstream calls. The entry is replaced wholesale on refresh,
//! never mutated in place. Nothing is persisted; a restart starts cold and
//! the fallback provider makes the first fill non-empty.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

use super::ProviderRegistry;
use crate::models::RateTable;

/// A cached aggregation result and when it was produced.
struct CacheEntry {
    rates: Arc<RateTable>,
    fetched_at: Instant,
}

/// Shared rate cache with coalesced refreshes.
///
/// Construct one per process and share it via `Arc`. The base currency
/// and the set of required display currencies are fixed at construction;
/// the store has exactly one base.
pub struct RateCache {
    registry: ProviderRegistry,
    base: String,
    required: Vec<String>,
    refresh_interval: Duration,
    entry: RwLock<Option<CacheEntry>>,
    /// Serializes refreshes so one staleness event triggers one
    /// aggregation pass; waiters reuse the table that pass produced.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl RateCache {
    /// Create a cache over the given provider chain.
    pub fn new(
        registry: ProviderRegistry,
        base: String,
        required: Vec<String>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            registry,
            base,
            required,
            refresh_interval,
            entry: RwLock::new(None),
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// The current rate table, refreshing it first if stale or missing.
    ///
    /// Fresh reads return immediately. Stale or cold callers queue on the
    /// refresh gate; whoever gets it first re-checks freshness, runs the
    /// aggregation if still needed, and everyone queued behind picks up
    /// the fresh entry without fetching again.
    pub async fn get_rates(&self) -> Arc<RateTable> {
        if let Some(rates) = self.fresh() {
            return rates;
        }

        let _gate = self.refresh_gate.lock().await;
        if let Some(rates) = self.fresh() {
            return rates;
        }
        self.refresh_now().await
    }

    /// Refresh regardless of freshness. Still coalesced with in-flight
    /// refreshes; meant for operator tooling after an override edit.
    pub async fn force_refresh(&self) -> Arc<RateTable> {
        let _gate = self.refresh_gate.lock().await;
        self.refresh_now().await
    }

    /// Age of the cached table, if any.
    pub fn last_refreshed(&self) -> Option<Duration> {
        self.read_entry().as_ref().map(|entry| entry.fetched_at.elapsed())
    }

    /// The base currency this cache aggregates for.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn fresh(&self) -> Option<Arc<RateTable>> {
        let entry = self.read_entry();
        entry
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.refresh_interval)
            .map(|entry| entry.rates.clone())
    }

    async fn refresh_now(&self) -> Arc<RateTable> {
        debug!("refreshing rate table for base {}", self.base);
        let rates = Arc::new(self.registry.resolve(&self.base, &self.required).await);

        let mut entry = self.write_entry();
        *entry = Some(CacheEntry {
            rates: rates.clone(),
            fetched_at: Instant::now(),
        });
        rates
    }

    /// Lock the entry for reading, recovering from poison if necessary.
    ///
    /// Serving a possibly stale table beats panicking here; the next
    /// refresh replaces it anyway.
    fn read_entry(&self) -> RwLockReadGuard<'_, Option<CacheEntry>> {
        self.entry.read().unwrap_or_else(|poisoned| {
            warn!("rate cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_entry(&self) -> RwLockWriteGuard<'_, Option<CacheEntry>> {
        self.entry.write().unwrap_or_else(|poisoned| {
            warn!("rate cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::RateProvider;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        rates: RateTable,
        delay: Duration,
        call_count: AtomicUsize,
    }

    impl CountingProvider {
        fn new(rates: RateTable) -> Arc<Self> {
            Arc::new(Self {
                rates,
                delay: Duration::ZERO,
                call_count: AtomicUsize::new(0),
            })
        }

        fn slow(rates: RateTable, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                rates,
                delay,
                call_count: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for CountingProvider {
        fn id(&self) -> &'static str {
            "COUNTING"
        }

        async fn fetch_rates(&self, _base: &str) -> Option<RateTable> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.delay > Duration::ZERO {
                tokio::time::sleep(self.delay).await;
            }
            Some(self.rates.clone())
        }
    }

    fn usd_table() -> RateTable {
        [("USD", 0.21)].into_iter().collect()
    }

    fn cache_with(provider: Arc<CountingProvider>, interval: Duration) -> RateCache {
        let providers: Vec<Arc<dyn RateProvider>> = vec![provider];
        RateCache::new(
            ProviderRegistry::with_providers(providers),
            "MYR".to_string(),
            vec!["USD".to_string()],
            interval,
        )
    }

    #[tokio::test]
    async fn test_fresh_reads_do_not_refetch() {
        let provider = CountingProvider::new(usd_table());
        let cache = cache_with(provider.clone(), Duration::from_secs(30));

        let first = cache.get_rates().await;
        let second = cache.get_rates().await;

        assert_eq!(first.get("USD"), second.get("USD"));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_expiry_triggers_exactly_one_refresh() {
        let provider = CountingProvider::new(usd_table());
        let cache = cache_with(provider.clone(), Duration::from_millis(20));

        cache.get_rates().await;
        assert_eq!(provider.calls(), 1);

        tokio::time::sleep(Duration::from_millis(40)).await;

        cache.get_rates().await;
        assert_eq!(provider.calls(), 2);

        cache.get_rates().await;
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_cold_start_fetches_once() {
        let provider = CountingProvider::slow(usd_table(), Duration::from_millis(50));
        let cache = Arc::new(cache_with(provider.clone(), Duration::from_secs(30)));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move { cache.get_rates().await }));
        }

        for handle in handles {
            let rates = handle.await.unwrap();
            assert_eq!(rates.get("USD"), Some(0.21));
        }
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_cold_start_is_never_empty_with_fallback() {
        use crate::provider::static_rates::StaticRatesProvider;

        let providers: Vec<Arc<dyn RateProvider>> = vec![Arc::new(StaticRatesProvider::new())];
        let cache = RateCache::new(
            ProviderRegistry::with_providers(providers),
            "MYR".to_string(),
            vec!["USD".to_string(), "IDR".to_string()],
            Duration::from_secs(30),
        );

        let rates = cache.get_rates().await;
        assert!(!rates.is_empty());
        assert!(rates.contains("USD"));
        assert!(rates.contains("IDR"));
    }

    #[tokio::test]
    async fn test_force_refresh_refetches() {
        let provider = CountingProvider::new(usd_table());
        let cache = cache_with(provider.clone(), Duration::from_secs(30));

        cache.get_rates().await;
        cache.force_refresh().await;

        assert_eq!(provider.calls(), 2);
        assert!(cache.last_refreshed().is_some());
    }
}
