use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::value_objects::{Currency, ValueObjectError};

/// Render an amount in en-US style: symbol prefix, comma-grouped thousands,
/// exactly two fraction digits, half-away-from-zero rounding. The sign goes
/// before the symbol, `-$3.50`.
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
  let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
  let sign = if rounded.is_sign_negative() { "-" } else { "" };
  let text = format!("{:.2}", rounded.abs());
  let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
  format!(
    "{}{}{}.{}",
    sign,
    currency.symbol(),
    group_thousands(whole),
    cents
  )
}

/// Same as [`format_currency`] but resolves the code first, so callers
/// holding untyped text get an error instead of a silent wrong symbol.
pub fn format_currency_code(amount: Decimal, code: &str) -> Result<String, ValueObjectError> {
  let currency = Currency::from_str(code)?;
  Ok(format_currency(amount, currency))
}

fn group_thousands(digits: &str) -> String {
  digits
    .as_bytes()
    .rchunks(3)
    .rev()
    .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
    .collect::<Vec<_>>()
    .join(",")
}
