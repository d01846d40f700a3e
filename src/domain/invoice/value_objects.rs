use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Unknown currency code: {0}")]
  UnknownCurrency(String),
  #[error("Unknown detail section: {0}")]
  UnknownSection(String),
  #[error("Unknown party field: {0}")]
  UnknownPartyField(String),
  #[error("Unknown invoice detail field: {0}")]
  UnknownDetailField(String),
  #[error("Unknown line item field: {0}")]
  UnknownItemField(String),
  #[error("Invalid date: {0}")]
  InvalidDate(String),
}

// Currency - display formatting only, never affects stored amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
  USD,
  EUR,
  GBP,
  BDT,
}

impl Currency {
  pub fn as_str(&self) -> &'static str {
    match self {
      Currency::USD => "USD",
      Currency::EUR => "EUR",
      Currency::GBP => "GBP",
      Currency::BDT => "BDT",
    }
  }

  pub fn symbol(&self) -> &'static str {
    match self {
      Currency::USD => "$",
      Currency::EUR => "€",
      Currency::GBP => "£",
      Currency::BDT => "৳",
    }
  }

  pub fn all() -> &'static [Currency] {
    &[Currency::USD, Currency::EUR, Currency::GBP, Currency::BDT]
  }
}

impl FromStr for Currency {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_uppercase().as_str() {
      "USD" => Ok(Currency::USD),
      "EUR" => Ok(Currency::EUR),
      "GBP" => Ok(Currency::GBP),
      "BDT" => Ok(Currency::BDT),
      _ => Err(ValueObjectError::UnknownCurrency(s.to_string())),
    }
  }
}

/// Parse free-text numeric entry with zero fallback.
///
/// Quantity, unit price and tax rate arrive as text. Anything that is not a
/// complete number (empty, `abc`, `12abc`) becomes zero so an edit can never
/// fail on input. Plain decimals and scientific notation are accepted; the
/// whole trimmed string must parse.
pub fn parse_decimal_or_zero(raw: &str) -> Decimal {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Decimal::ZERO;
  }
  Decimal::from_str(trimmed)
    .or_else(|_| Decimal::from_scientific(trimmed))
    .unwrap_or(Decimal::ZERO)
}
