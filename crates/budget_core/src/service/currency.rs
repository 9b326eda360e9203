//! Currency codes and exchange-rate conversion.
//!
//! # Responsibility
//! - Validate ISO-4217 style currency codes.
//! - Convert amounts through a base currency (THB unless configured).
//!
//! # Invariants
//! - All rates in one table are expressed relative to the same base currency.
//! - Rates must be strictly positive; conversion never divides by zero.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default currency exchange rates are expressed against.
pub const BASE_CURRENCY: &str = "THB";

static CURRENCY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency code regex"));

/// Errors from currency parsing and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Code is not three ASCII letters.
    InvalidCode(String),
    /// Rate is zero or negative.
    NonPositiveRate { code: String, rate: Decimal },
    /// Conversion left the `Decimal` range.
    Overflow,
}

impl Display for CurrencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCode(value) => {
                write!(f, "invalid currency code `{value}`; expected 3 letters")
            }
            Self::NonPositiveRate { code, rate } => {
                write!(f, "exchange rate for {code} must be positive, got {rate}")
            }
            Self::Overflow => write!(f, "decimal overflow during currency conversion"),
        }
    }
}

impl Error for CurrencyError {}

/// Validated uppercase three-letter currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses a code, trimming and uppercasing input first.
    pub fn parse(value: &str) -> Result<Self, CurrencyError> {
        let normalized = value.trim().to_ascii_uppercase();
        if !CURRENCY_CODE_RE.is_match(&normalized) {
            return Err(CurrencyError::InvalidCode(value.trim().to_string()));
        }
        Ok(Self(normalized))
    }

    /// The default base currency code.
    pub fn base() -> Self {
        Self(BASE_CURRENCY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_base(&self) -> bool {
        self.0 == BASE_CURRENCY
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// Value of one unit of `code`, in base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub code: CurrencyCode,
    pub rate_to_base: Decimal,
}

impl ExchangeRate {
    /// Creates a validated rate.
    pub fn new(code: CurrencyCode, rate_to_base: Decimal) -> Result<Self, CurrencyError> {
        let rate = Self { code, rate_to_base };
        rate.validate()?;
        Ok(rate)
    }

    /// Identity rate for the default base currency.
    pub fn base() -> Self {
        Self::identity(CurrencyCode::base())
    }

    /// Rate of `1` for a currency acting as the base of a rate table.
    pub fn identity(code: CurrencyCode) -> Self {
        Self {
            code,
            rate_to_base: Decimal::ONE,
        }
    }

    /// Rejects non-positive rates, including ones deserialized from input.
    pub fn validate(&self) -> Result<(), CurrencyError> {
        if self.rate_to_base <= Decimal::ZERO {
            return Err(CurrencyError::NonPositiveRate {
                code: self.code.to_string(),
                rate: self.rate_to_base,
            });
        }
        Ok(())
    }
}

/// Converts an amount in `rate.code` to base currency.
pub fn convert_to_base(amount: Decimal, rate: &ExchangeRate) -> Result<Decimal, CurrencyError> {
    rate.validate()?;
    amount
        .checked_mul(rate.rate_to_base)
        .ok_or(CurrencyError::Overflow)
}

/// Converts an amount in base currency to `rate.code`.
pub fn convert_from_base(amount: Decimal, rate: &ExchangeRate) -> Result<Decimal, CurrencyError> {
    rate.validate()?;
    amount
        .checked_div(rate.rate_to_base)
        .ok_or(CurrencyError::Overflow)
}

/// Converts between two currencies via the base currency.
pub fn convert(
    amount: Decimal,
    from: &ExchangeRate,
    to: &ExchangeRate,
) -> Result<Decimal, CurrencyError> {
    if from.code == to.code {
        from.validate()?;
        return Ok(amount);
    }
    let base_amount = convert_to_base(amount, from)?;
    convert_from_base(base_amount, to)
}

/// Display symbol for a currency; unknown codes render as `<CODE> `.
pub fn currency_symbol(code: &CurrencyCode) -> String {
    match code.as_str() {
        "THB" => "฿".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "SGD" => "S$".to_string(),
        other => format!("{other} "),
    }
}

#[cfg(test)]
mod tests {
    use super::{currency_symbol, CurrencyCode, CurrencyError};

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let code = CurrencyCode::parse(" usd ").unwrap();
        assert_eq!(code.as_str(), "USD");
        assert!(!code.is_base());
        assert!(CurrencyCode::parse("thb").unwrap().is_base());
    }

    #[test]
    fn parse_rejects_bad_codes() {
        for value in ["", "US", "USDT", "U$D", "12A"] {
            assert!(
                matches!(CurrencyCode::parse(value), Err(CurrencyError::InvalidCode(_))),
                "expected rejection for `{value}`"
            );
        }
    }

    #[test]
    fn unknown_symbol_falls_back_to_code() {
        let code = CurrencyCode::parse("MYR").unwrap();
        assert_eq!(currency_symbol(&code), "MYR ");
    }
}
