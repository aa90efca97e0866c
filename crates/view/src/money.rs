//! pt-BR currency rendering.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a value as Brazilian real: `R$ 1.299,99`.
///
/// Two fraction digits (half-away-from-zero), dot as the thousands
/// separator, comma as the decimal separator.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), format!("{fraction:0<2}")),
        None => (text, "00".to_string()),
    };
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {},{fraction}", group_thousands(&integer))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (len - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
