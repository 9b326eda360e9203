use budget_core::{
    convert, convert_from_base, convert_to_base, currency_symbol, CurrencyCode, CurrencyError,
    ExchangeRate,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn rate(code: &str, rate_to_base: Decimal) -> ExchangeRate {
    ExchangeRate::new(CurrencyCode::parse(code).unwrap(), rate_to_base).unwrap()
}

#[test]
fn converts_to_and_from_base() {
    let usd = rate("USD", dec!(35.50));

    assert_eq!(convert_to_base(dec!(100), &usd).unwrap(), dec!(3550));
    assert_eq!(convert_from_base(dec!(3550), &usd).unwrap(), dec!(100));
    assert_eq!(
        convert_to_base(dec!(100), &ExchangeRate::base()).unwrap(),
        dec!(100)
    );
}

#[test]
fn cross_conversion_goes_through_base() {
    let usd = rate("USD", dec!(36));
    let eur = rate("EUR", dec!(40));

    assert_eq!(convert(dec!(10), &eur, &usd).unwrap(), dec!(400) / dec!(36));
    assert_eq!(convert(dec!(10), &usd, &usd).unwrap(), dec!(10));
}

#[test]
fn non_positive_rates_are_rejected() {
    let code = CurrencyCode::parse("JPY").unwrap();
    assert!(matches!(
        ExchangeRate::new(code.clone(), Decimal::ZERO),
        Err(CurrencyError::NonPositiveRate { .. })
    ));

    let broken = ExchangeRate {
        code,
        rate_to_base: dec!(-1),
    };
    assert!(convert_from_base(dec!(1), &broken).is_err());
    assert!(convert_to_base(dec!(1), &broken).is_err());
}

#[test]
fn rate_deserializes_with_validated_code() {
    let parsed: ExchangeRate =
        serde_json::from_value(serde_json::json!({"code": "usd", "rateToBase": "35.25"}))
            .unwrap();
    assert_eq!(parsed.code.as_str(), "USD");
    assert_eq!(parsed.rate_to_base, dec!(35.25));

    let err = serde_json::from_value::<ExchangeRate>(
        serde_json::json!({"code": "dollars", "rateToBase": 1}),
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid currency code"));
}

#[test]
fn known_symbols_render() {
    assert_eq!(currency_symbol(&CurrencyCode::base()), "฿");
    assert_eq!(currency_symbol(&CurrencyCode::parse("SGD").unwrap()), "S$");
}
