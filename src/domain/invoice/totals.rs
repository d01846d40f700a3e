use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::LineItem;

/// Derived money fields. Never edited directly, always recomputed from the
/// line items and tax rate after every state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

impl InvoiceTotals {
  /// subtotal = sum(quantity * unit price), tax = subtotal * rate / 100,
  /// total = subtotal + tax. The tax rate is applied exactly as stored:
  /// negative or over-100 rates flow straight through the arithmetic.
  /// Products and sums saturate at the `Decimal` bounds instead of
  /// overflowing.
  pub fn calculate(items: &[LineItem], tax_rate: Decimal) -> Self {
    let subtotal = items
      .iter()
      .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.amount()));
    let tax_amount = subtotal.saturating_mul(tax_rate) / Decimal::ONE_HUNDRED;
    let total = subtotal.saturating_add(tax_amount);
    Self {
      subtotal,
      tax_amount,
      total,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn item(quantity: Decimal, unit_price: Decimal) -> LineItem {
    LineItem::new(String::new(), quantity, unit_price)
  }

  #[test]
  fn test_calculates_the_reference_example() {
    let items = vec![item(dec!(1), dec!(1200)), item(dec!(20), dec!(75))];
    let totals = InvoiceTotals::calculate(&items, dec!(8.25));
    assert_eq!(totals.subtotal, dec!(2700));
    assert_eq!(totals.tax_amount, dec!(222.75));
    assert_eq!(totals.total, dec!(2922.75));
  }

  #[test]
  fn test_empty_items_yield_zero() {
    let totals = InvoiceTotals::calculate(&[], dec!(8.25));
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.tax_amount, Decimal::ZERO);
    assert_eq!(totals.total, Decimal::ZERO);
  }

  #[test]
  fn test_subtotal_is_order_independent() {
    let forward = vec![item(dec!(2), dec!(10)), item(dec!(3), dec!(7.5))];
    let reversed: Vec<LineItem> = forward.iter().rev().cloned().collect();
    assert_eq!(
      InvoiceTotals::calculate(&forward, dec!(5)),
      InvoiceTotals::calculate(&reversed, dec!(5))
    );
  }

  #[test]
  fn test_tax_rate_is_not_clamped() {
    let items = vec![item(dec!(1), dec!(100))];
    let negative = InvoiceTotals::calculate(&items, dec!(-10));
    assert_eq!(negative.tax_amount, dec!(-10));
    assert_eq!(negative.total, dec!(90));

    let excessive = InvoiceTotals::calculate(&items, dec!(250));
    assert_eq!(excessive.tax_amount, dec!(250));
    assert_eq!(excessive.total, dec!(350));
  }

  #[test]
  fn test_zero_rate_means_total_equals_subtotal() {
    let items = vec![item(dec!(4), dec!(25))];
    let totals = InvoiceTotals::calculate(&items, Decimal::ZERO);
    assert_eq!(totals.tax_amount, Decimal::ZERO);
    assert_eq!(totals.total, totals.subtotal);
  }

  #[test]
  fn test_saturates_instead_of_overflowing() {
    let quantity = Decimal::from_scientific("1e20").unwrap();
    let price = Decimal::from_scientific("1e10").unwrap();

    let items = vec![item(quantity, price)];
    let totals = InvoiceTotals::calculate(&items, dec!(8.25));
    assert_eq!(totals.subtotal, Decimal::MAX);
    assert_eq!(totals.total, Decimal::MAX);

    let negated = vec![item(-quantity, price)];
    let negative = InvoiceTotals::calculate(&negated, dec!(8.25));
    assert_eq!(negative.subtotal, Decimal::MIN);
    assert_eq!(negative.total, Decimal::MIN);
  }

  #[test]
  fn test_huge_tax_rates_saturate_the_tax() {
    let items = vec![item(dec!(1), dec!(1200)), item(dec!(20), dec!(75))];
    let rate = Decimal::from_scientific("1e27").unwrap();

    let totals = InvoiceTotals::calculate(&items, rate);
    assert_eq!(totals.subtotal, dec!(2700));
    assert_eq!(totals.tax_amount, Decimal::MAX / Decimal::ONE_HUNDRED);
    assert_eq!(
      totals.total,
      dec!(2700) + Decimal::MAX / Decimal::ONE_HUNDRED
    );
  }
}
