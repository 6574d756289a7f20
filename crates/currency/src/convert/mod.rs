//! Price conversion from the base currency.
//!
//! All stored prices are in the base currency; conversion multiplies by
//! the cached rate and applies the per-currency rounding rule. Currencies
//! quoted in whole units (IDR, VND, JPY, KRW) round up to the next unit
//! so a converted price is never below the exact product; everything else
//! rounds half-up to 2 decimals.

use std::sync::Arc;

use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::CurrencyError;
use crate::models::{is_zero_decimal, normalize_code, RateTable};
use crate::registry::RateCache;

/// Converts base-currency amounts using the shared rate cache.
pub struct PriceConverter {
    base: String,
    cache: Arc<RateCache>,
}

impl PriceConverter {
    /// Create a converter for the given base over the shared cache.
    pub fn new(base: String, cache: Arc<RateCache>) -> Self {
        Self { base, cache }
    }

    /// Convert a base-currency amount into the target currency.
    ///
    /// The base currency itself converts to the same amount, rounded for
    /// display. A currency absent from the rate table yields
    /// [`CurrencyError::RateUnavailable`]; callers should fall back to
    /// showing the base-currency price.
    pub async fn convert(&self, amount: Decimal, target: &str) -> Result<Decimal, CurrencyError> {
        let code = normalize_code(target)
            .ok_or_else(|| CurrencyError::InvalidCurrencyCode(target.to_string()))?;

        if code == self.base {
            return Ok(round_for_currency(amount, &code));
        }

        let rates = self.cache.get_rates().await;
        convert_with_table(amount, &code, &self.base, &rates)
    }
}

/// Pure conversion against an already-fetched table.
///
/// `target` must be normalized. Exposed for callers that batch-convert
/// against one table snapshot.
pub fn convert_with_table(
    amount: Decimal,
    target: &str,
    base: &str,
    rates: &RateTable,
) -> Result<Decimal, CurrencyError> {
    if target == base {
        return Ok(round_for_currency(amount, target));
    }

    let rate = rates
        .get(target)
        .and_then(Decimal::from_f64)
        .ok_or_else(|| CurrencyError::RateUnavailable(target.to_string()))?;

    Ok(round_for_currency(amount * rate, target))
}

/// Apply the per-currency rounding rule.
///
/// Whole-unit currencies take the ceiling so conversion never undercuts
/// the exact product; the rest round half-up to 2 decimal places.
pub fn round_for_currency(amount: Decimal, code: &str) -> Decimal {
    if is_zero_decimal(code) {
        amount.ceil()
    } else {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
