//! Human-readable price rendering.
//!
//! The symbol is always a prefix; whether a space follows it, how many
//! fraction digits show, and whether the integer part gets period-style
//! thousands grouping all come from [`CurrencySpec`]. A currency without
//! a registered spec falls back to its code as the prefix.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::spec_for;

/// Render an amount with its currency symbol, e.g. `$23.00`, `RM 100.00`,
/// `Rp 4.306`, `€1.234,56`.
pub fn format_price(amount: Decimal, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let (symbol, spaced, decimal_places, grouped) = match spec_for(&code) {
        Some(spec) => (spec.symbol, spec.symbol_spaced, spec.decimal_places, spec.grouped),
        None => (code.as_str(), true, 2, false),
    };

    let rounded =
        amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (digits, String::new()),
    };

    let int_part = if grouped {
        group_digits(&int_part)
    } else {
        int_part
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(symbol);
    if spaced {
        out.push(' ');
    }
    out.push_str(&int_part);

    if decimal_places > 0 {
        let mut frac = frac_part;
        frac.truncate(decimal_places as usize);
        while frac.len() < decimal_places as usize {
            frac.push('0');
        }
        // Period-grouped currencies use the comma decimal mark
        out.push(if grouped { ',' } else { '.' });
        out.push_str(&frac);
    }

    out
}

/// Insert a period every three digits from the right.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_symbol_prefix() {
        assert_eq!(format_price(dec!(23), "USD"), "$23.00");
        assert_eq!(format_price(dec!(23.5), "USD"), "$23.50");
    }

    #[test]
    fn test_spaced_symbol() {
        assert_eq!(format_price(dec!(100), "MYR"), "RM 100.00");
    }

    #[test]
    fn test_whole_unit_grouped() {
        assert_eq!(format_price(dec!(4306), "IDR"), "Rp 4.306");
        assert_eq!(format_price(dec!(5312450), "VND"), "₫ 5.312.450");
    }

    #[test]
    fn test_whole_unit_ungrouped() {
        assert_eq!(format_price(dec!(3307), "JPY"), "¥3307");
    }

    #[test]
    fn test_grouped_two_decimal_uses_comma_mark() {
        assert_eq!(format_price(dec!(1234.56), "EUR"), "€1.234,56");
        assert_eq!(format_price(dec!(19.62), "EUR"), "€19,62");
    }

    #[test]
    fn test_no_grouping_for_plain_currencies() {
        assert_eq!(format_price(dec!(1234567.89), "USD"), "$1234567.89");
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        assert_eq!(format_price(dec!(12.3), "xxx"), "XXX 12.30");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_price(dec!(-5.25), "USD"), "-$5.25");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1.234");
        assert_eq!(group_digits("1234567"), "1.234.567");
    }
}
