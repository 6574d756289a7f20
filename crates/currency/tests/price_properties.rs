//! Property-based integration tests for price conversion and display.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.
//! The service under test runs on the compiled-in fallback table only,
//! so no network is involved.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use kedai_currency::{
    CurrencyConfig, CurrencyService, ProviderRegistry, RateProvider, StaticRatesProvider,
};

// =============================================================================
// Harness
// =============================================================================

fn offline_service() -> CurrencyService {
    let providers: Vec<Arc<dyn RateProvider>> = vec![Arc::new(StaticRatesProvider::new())];
    CurrencyService::with_registry(
        CurrencyConfig::default(),
        ProviderRegistry::with_providers(providers),
    )
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
        .block_on(future)
}

// =============================================================================
// Generators
// =============================================================================

/// Generates a price in base-currency cents, up to RM 10,000,000.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Picks one of the storefront's display currencies.
fn arb_currency() -> impl Strategy<Value = String> {
    let codes: Vec<String> = CurrencyConfig::default().display_currencies;
    proptest::sample::select(codes)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A display price is never empty and never carries a broken number,
    /// whatever the amount or supported currency.
    #[test]
    fn prop_display_price_never_broken(amount in arb_amount(), code in arb_currency()) {
        let price = block_on(async {
            let service = offline_service();
            service.get_display_price(amount, &code).await
        });

        prop_assert!(!price.is_empty());
        prop_assert!(!price.contains("NaN"));
        prop_assert!(!price.contains("inf"));
        prop_assert!(price.chars().any(|ch| ch.is_ascii_digit()));
    }

    /// Converting into the base currency returns the amount itself,
    /// up to 2-decimal display rounding.
    #[test]
    fn prop_base_conversion_is_identity(amount in arb_amount()) {
        let converted = block_on(async {
            let service = offline_service();
            service.convert(amount, "MYR").await
        }).unwrap();

        let expected = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(converted, expected);
    }

    /// Whole-unit currencies always yield an integer at least as large as
    /// the exact product, and never a full unit above it.
    #[test]
    fn prop_whole_unit_conversion_ceils(amount in arb_amount()) {
        let converted = block_on(async {
            let service = offline_service();
            service.convert(amount, "IDR").await
        }).unwrap();

        let rate = StaticRatesProvider::rates().get("IDR").expect("fallback IDR rate");
        let exact = amount * Decimal::from_f64(rate).expect("finite rate");

        prop_assert_eq!(converted, converted.trunc());
        prop_assert!(converted >= exact);
        prop_assert!(converted - exact < Decimal::ONE);
    }
}
