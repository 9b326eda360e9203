use budget_core::{format_currency, format_percentage, sanitize_csv_cell};
use rust_decimal_macros::dec;

#[test]
fn currency_uses_default_symbol_and_grouping() {
    assert_eq!(format_currency(dec!(267500), None), "฿267,500.00");
    assert_eq!(format_currency(dec!(1234567.891), None), "฿1,234,567.89");
    assert_eq!(format_currency(dec!(0), None), "฿0.00");
    assert_eq!(format_currency(dec!(999.995), None), "฿1,000.00");
}

#[test]
fn currency_accepts_custom_symbol_and_negative_values() {
    assert_eq!(format_currency(dec!(42.5), Some("$")), "$42.50");
    assert_eq!(format_currency(dec!(-1250), Some("€")), "-€1,250.00");
}

#[test]
fn percentage_keeps_sign_and_two_digits() {
    assert_eq!(format_percentage(dec!(12.1495327102803738317757)), "12.15%");
    assert_eq!(format_percentage(dec!(20)), "20.00%");
    assert_eq!(format_percentage(dec!(-5.5)), "-5.50%");
    assert_eq!(format_percentage(dec!(1234.5)), "1234.50%");
}

#[test]
fn sanitize_prefixes_formula_starters() {
    assert_eq!(sanitize_csv_cell("=SUM(A1:A10)"), "'=SUM(A1:A10)");
    assert_eq!(sanitize_csv_cell("+1"), "'+1");
    assert_eq!(sanitize_csv_cell("-2"), "'-2");
    assert_eq!(sanitize_csv_cell("@cmd"), "'@cmd");
}

#[test]
fn sanitize_leaves_safe_strings_unchanged() {
    for cell in ["normal text", "", "a=b", " =leading space", "'quoted", "บาท"] {
        assert_eq!(sanitize_csv_cell(cell), cell);
        assert_eq!(sanitize_csv_cell(&sanitize_csv_cell(cell)), cell);
    }
}

#[test]
fn sanitize_adds_exactly_one_apostrophe() {
    let once = sanitize_csv_cell("==double");
    assert_eq!(once, "'==double");
    assert_eq!(sanitize_csv_cell(&once), once);
}
