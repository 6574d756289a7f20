//! Static display and rounding metadata per currency.
//!
//! One table serves both the converter (how to round) and the formatter
//! (symbol, spacing, grouping), so the two can never disagree about which
//! currencies are quoted without minor units.

/// Display and rounding rules for one currency.
#[derive(Clone, Copy, Debug)]
pub struct CurrencySpec {
    /// Uppercase currency code.
    pub code: &'static str,
    /// Display symbol, always rendered as a prefix.
    pub symbol: &'static str,
    /// Whether a space separates the symbol from the number.
    pub symbol_spaced: bool,
    /// Minor-unit digits shown: 0 for currencies quoted in whole units,
    /// 2 otherwise. Zero-decimal amounts are rounded up, never down.
    pub decimal_places: u32,
    /// Whether the integer part uses period-style thousands grouping
    /// (and, for 2-decimal currencies, a comma decimal mark).
    pub grouped: bool,
}

/// Currencies the storefront knows how to display.
///
/// The zero-decimal set here is the single source of truth: IDR, VND, JPY
/// and KRW are all quoted in whole units, charged with a ceiling, and
/// rendered without a fraction.
const CURRENCY_SPECS: &[CurrencySpec] = &[
    CurrencySpec { code: "MYR", symbol: "RM", symbol_spaced: true, decimal_places: 2, grouped: false },
    CurrencySpec { code: "USD", symbol: "$", symbol_spaced: false, decimal_places: 2, grouped: false },
    CurrencySpec { code: "SGD", symbol: "S$", symbol_spaced: false, decimal_places: 2, grouped: false },
    CurrencySpec { code: "EUR", symbol: "€", symbol_spaced: false, decimal_places: 2, grouped: true },
    CurrencySpec { code: "GBP", symbol: "£", symbol_spaced: false, decimal_places: 2, grouped: false },
    CurrencySpec { code: "THB", symbol: "฿", symbol_spaced: false, decimal_places: 2, grouped: false },
    CurrencySpec { code: "IDR", symbol: "Rp", symbol_spaced: true, decimal_places: 0, grouped: true },
    CurrencySpec { code: "VND", symbol: "₫", symbol_spaced: true, decimal_places: 0, grouped: true },
    CurrencySpec { code: "JPY", symbol: "¥", symbol_spaced: false, decimal_places: 0, grouped: false },
    CurrencySpec { code: "KRW", symbol: "₩", symbol_spaced: false, decimal_places: 0, grouped: false },
];

/// Look up the spec for a currency code, if the storefront knows it.
pub fn spec_for(code: &str) -> Option<&'static CurrencySpec> {
    CURRENCY_SPECS.iter().find(|spec| spec.code == code)
}

/// Whether a currency is quoted in whole units only.
///
/// Unknown currencies are treated as 2-decimal.
pub fn is_zero_decimal(code: &str) -> bool {
    spec_for(code).is_some_and(|spec| spec.decimal_places == 0)
}

/// All currency codes with display metadata.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    CURRENCY_SPECS.iter().map(|spec| spec.code)
}
