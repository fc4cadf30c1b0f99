//! Display formatting for prices and capital amounts.
//!
//! Pure helpers for presentation clients: price precision adapts to the
//! magnitude so sub-cent assets stay readable, and large capital
//! amounts abbreviate to T/B/M suffixes.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Format a USD price with precision adapted to its magnitude:
/// six decimals under one cent, four under a dollar, otherwise two
/// with thousands separators.
pub fn format_price(price: Decimal) -> String {
    if price < Decimal::new(1, 2) {
        format!("${:.6}", price)
    } else if price < Decimal::ONE {
        format!("${:.4}", price)
    } else {
        format!("${}", group_thousands(&format!("{:.2}", price)))
    }
}

/// Format a capital amount (market cap, volume) with a magnitude
/// suffix. A `0` input is the "not reported" sentinel; callers are
/// expected to render it as N/A rather than "$0".
pub fn format_market_cap(value: Decimal) -> String {
    let approx = value.to_f64().unwrap_or(0.0);

    if approx >= 1e12 {
        format!("${:.2}T", approx / 1e12)
    } else if approx >= 1e9 {
        format!("${:.2}B", approx / 1e9)
    } else if approx >= 1e6 {
        format!("${:.2}M", approx / 1e6)
    } else {
        format!("${}", group_thousands(&format!("{:.0}", value)))
    }
}

/// Insert thousands separators into a non-negative decimal string.
fn group_thousands(raw: &str) -> String {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac_part) => format!("{}.{}", grouped, frac_part),
        None => grouped,
    }
}
