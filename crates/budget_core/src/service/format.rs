//! Display formatting and CSV cell sanitization.
//!
//! # Invariants
//! - Currency and percentage output always has exactly two fractional digits.
//! - Display rounding is half away from zero; a value that rounds to zero
//!   never renders a sign.
//! - `sanitize_csv_cell` inspects only the first character and never fails.

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol used when `format_currency` receives none.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "฿";

const CSV_FORMULA_PREFIXES: [char; 4] = ['=', '+', '-', '@'];

/// Renders `amount` as `<symbol><grouped integer>.<2 digits>`.
///
/// Negative amounts put the sign before the symbol, e.g. `-฿1,250.00`.
pub fn format_currency(amount: Decimal, symbol: Option<&str>) -> String {
    let symbol = symbol.unwrap_or(DEFAULT_CURRENCY_SYMBOL);
    let (negative, integer, fraction) = split_two_places(amount);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol}{}.{fraction}", group_thousands(&integer))
}

/// Renders `value` as a percentage with two fractional digits, e.g. `12.15%`.
pub fn format_percentage(value: Decimal) -> String {
    let (negative, integer, fraction) = split_two_places(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{integer}.{fraction}%")
}

/// Renders a decimal with exactly two fractional digits and no grouping.
///
/// Used for machine-readable export cells.
pub fn format_plain(value: Decimal) -> String {
    let (negative, integer, fraction) = split_two_places(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{integer}.{fraction}")
}

/// Neutralizes spreadsheet formula injection.
///
/// Cells starting with `=`, `+`, `-` or `@` get one leading apostrophe;
/// everything else is returned unchanged.
pub fn sanitize_csv_cell(cell: &str) -> String {
    match cell.chars().next() {
        Some(first) if CSV_FORMULA_PREFIXES.contains(&first) => format!("'{cell}"),
        _ => cell.to_string(),
    }
}

/// Splits a rounded value into sign, integer digits and two fraction digits.
fn split_two_places(value: Decimal) -> (bool, String, String) {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (digits, String::new()),
    };
    let mut fraction = fraction;
    while fraction.len() < 2 {
        fraction.push('0');
    }
    (negative, integer, fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_plain, group_thousands, split_two_places};
    use rust_decimal_macros::dec;

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn split_pads_fraction() {
        assert_eq!(
            split_two_places(dec!(250000)),
            (false, "250000".to_string(), "00".to_string())
        );
        assert_eq!(
            split_two_places(dec!(1.5)),
            (false, "1".to_string(), "50".to_string())
        );
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_plain(dec!(-0.001)), "0.00");
    }
}
