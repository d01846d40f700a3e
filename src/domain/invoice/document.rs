use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::edits::{DetailTarget, DetailsField, Edit, ItemField, PartyField, PartySection};
use super::errors::InvoiceError;
use super::totals::InvoiceTotals;
use super::value_objects::{Currency, ValueObjectError, parse_decimal_or_zero};

// Party - free-text identity block for either side of the invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyInfo {
  pub name: String,
  pub address: String,
  pub city: String,
  pub email: String,
  pub phone: String,
}

impl PartyInfo {
  pub fn new(name: String, address: String, city: String, email: String, phone: String) -> Self {
    Self {
      name,
      address,
      city,
      email,
      phone,
    }
  }

  fn set_field(&mut self, field: PartyField, value: String) {
    match field {
      PartyField::Name => self.name = value,
      PartyField::Address => self.address = value,
      PartyField::City => self.city = value,
      PartyField::Email => self.email = value,
      PartyField::Phone => self.phone = value,
    }
  }
}

// Invoice metadata - number is free text, dates are calendar days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
  pub number: String,
  pub date: NaiveDate,
  pub due_date: NaiveDate,
  pub currency: Currency,
}

// Line item - one billable row; the id stays stable for the row's lifetime
// and is never reused after deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
  pub id: Uuid,
  pub description: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
}

impl LineItem {
  pub fn new(description: String, quantity: Decimal, unit_price: Decimal) -> Self {
    Self {
      id: Uuid::new_v4(),
      description,
      quantity,
      unit_price,
    }
  }

  /// Fresh row exactly as the add-item action creates it.
  pub fn blank() -> Self {
    Self::new(String::new(), Decimal::ONE, Decimal::ZERO)
  }

  /// Quantity times unit price, pinned to the `Decimal` range on overflow.
  pub fn amount(&self) -> Decimal {
    self.quantity.saturating_mul(self.unit_price)
  }
}

/// The whole editable document, replaced as one value on every edit.
///
/// Transitions never mutate `self`: they hand back the successor state with
/// totals already recomputed, or an error and no successor at all. Totals are
/// stored on the document so a serialized snapshot is self-contained, but
/// nothing outside [`InvoiceTotals::calculate`] ever writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
  pub sender: PartyInfo,
  pub recipient: PartyInfo,
  pub invoice_details: InvoiceDetails,
  pub items: Vec<LineItem>,
  pub tax_rate: Decimal,
  pub notes: String,
  #[serde(flatten)]
  pub totals: InvoiceTotals,
}

impl InvoiceDocument {
  pub fn new(
    sender: PartyInfo,
    recipient: PartyInfo,
    invoice_details: InvoiceDetails,
    items: Vec<LineItem>,
    tax_rate: Decimal,
    notes: String,
  ) -> Self {
    let totals = InvoiceTotals::calculate(&items, tax_rate);
    Self {
      sender,
      recipient,
      invoice_details,
      items,
      tax_rate,
      notes,
      totals,
    }
  }

  /// Starter document for a fresh editing session. The issue date is the
  /// given day and payment falls due a week later.
  pub fn seeded(today: NaiveDate) -> Self {
    Self::new(
      PartyInfo::new(
        "Your Company Name".to_string(),
        "123 Business Road".to_string(),
        "Anytown, TX 77001".to_string(),
        "billing@yourcompany.com".to_string(),
        "(555) 123-4567".to_string(),
      ),
      PartyInfo::new(
        "Client Name Inc.".to_string(),
        "456 Client Street".to_string(),
        "Client City, CA 90210".to_string(),
        "accounts@clientname.com".to_string(),
        "(555) 987-6543".to_string(),
      ),
      InvoiceDetails {
        number: format!("INV-{}-0001", today.format("%Y")),
        date: today,
        due_date: today + Duration::days(7),
        currency: Currency::USD,
      },
      vec![
        LineItem::new(
          "Phase 1: Project Scoping & Planning".to_string(),
          Decimal::ONE,
          dec!(1200.00),
        ),
        LineItem::new(
          "Phase 2: UI/UX Design & Prototyping".to_string(),
          dec!(20),
          dec!(75.00),
        ),
      ],
      dec!(8.25),
      String::new(),
    )
  }

  /// Run one edit and return the successor document.
  pub fn apply(&self, edit: &Edit) -> Result<InvoiceDocument, InvoiceError> {
    match edit {
      Edit::AddItem => Ok(self.add_item()),
      Edit::DeleteItem { id } => self.delete_item(*id),
      Edit::UpdateItemField { id, field, value } => self.update_item_field(*id, *field, value),
      Edit::UpdateDetail { target, value } => self.update_detail(target, value),
    }
  }

  /// Append a blank row (quantity 1, price 0) with a fresh id.
  pub fn add_item(&self) -> InvoiceDocument {
    let mut next = self.clone();
    next.items.push(LineItem::blank());
    next.recalculate();
    next
  }

  /// Remove a row by id. The last remaining row can never be removed, so the
  /// document always has at least one item.
  pub fn delete_item(&self, id: Uuid) -> Result<InvoiceDocument, InvoiceError> {
    if self.items.len() <= 1 {
      return Err(InvoiceError::LastLineItem);
    }
    if !self.items.iter().any(|item| item.id == id) {
      return Err(InvoiceError::LineItemNotFound(id));
    }
    let mut next = self.clone();
    next.items.retain(|item| item.id != id);
    next.recalculate();
    Ok(next)
  }

  /// Overwrite one field of one row. Descriptions are stored verbatim;
  /// quantity and unit price go through the zero-fallback numeric parse.
  pub fn update_item_field(
    &self,
    id: Uuid,
    field: ItemField,
    value: &str,
  ) -> Result<InvoiceDocument, InvoiceError> {
    let mut next = self.clone();
    let item = next
      .items
      .iter_mut()
      .find(|item| item.id == id)
      .ok_or(InvoiceError::LineItemNotFound(id))?;
    match field {
      ItemField::Description => item.description = value.to_string(),
      ItemField::Quantity => item.quantity = parse_decimal_or_zero(value),
      ItemField::UnitPrice => item.unit_price = parse_decimal_or_zero(value),
    }
    next.recalculate();
    Ok(next)
  }

  /// Overwrite one header field. Party fields, the invoice number and notes
  /// are stored verbatim; dates must be ISO `YYYY-MM-DD`; the currency must
  /// be a known code; the tax rate goes through the zero-fallback parse.
  pub fn update_detail(
    &self,
    target: &DetailTarget,
    value: &str,
  ) -> Result<InvoiceDocument, InvoiceError> {
    let mut next = self.clone();
    match target {
      DetailTarget::Party { section, field } => {
        let party = match section {
          PartySection::Sender => &mut next.sender,
          PartySection::Recipient => &mut next.recipient,
        };
        party.set_field(*field, value.to_string());
      }
      DetailTarget::Details { field } => match field {
        DetailsField::Number => next.invoice_details.number = value.to_string(),
        DetailsField::Date => next.invoice_details.date = parse_iso_date(value)?,
        DetailsField::DueDate => next.invoice_details.due_date = parse_iso_date(value)?,
        DetailsField::Currency => next.invoice_details.currency = Currency::from_str(value)?,
      },
      DetailTarget::TaxRate => next.tax_rate = parse_decimal_or_zero(value),
      DetailTarget::Notes => next.notes = value.to_string(),
    }
    next.recalculate();
    Ok(next)
  }

  fn recalculate(&mut self) {
    self.totals = InvoiceTotals::calculate(&self.items, self.tax_rate);
  }
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, ValueObjectError> {
  NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
    .map_err(|_| ValueObjectError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
  }

  #[test]
  fn test_seeded_document_shape() {
    let document = InvoiceDocument::seeded(today());

    assert_eq!(document.sender.name, "Your Company Name");
    assert_eq!(document.recipient.email, "accounts@clientname.com");
    assert_eq!(document.invoice_details.number, "INV-2025-0001");
    assert_eq!(document.invoice_details.date, today());
    assert_eq!(
      document.invoice_details.due_date,
      NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()
    );
    assert_eq!(document.invoice_details.currency, Currency::USD);
    assert_eq!(document.items.len(), 2);
    assert_eq!(document.tax_rate, dec!(8.25));
    assert_eq!(document.notes, "");
  }

  #[test]
  fn test_seeded_totals_are_computed_eagerly() {
    let document = InvoiceDocument::seeded(today());
    assert_eq!(document.totals.subtotal, dec!(2700));
    assert_eq!(document.totals.tax_amount, dec!(222.75));
    assert_eq!(document.totals.total, dec!(2922.75));
  }

  #[test]
  fn test_add_item_appends_a_blank_row() {
    let document = InvoiceDocument::seeded(today());
    let next = document.add_item();

    assert_eq!(next.items.len(), 3);
    let added = &next.items[2];
    assert_eq!(added.description, "");
    assert_eq!(added.quantity, Decimal::ONE);
    assert_eq!(added.unit_price, Decimal::ZERO);
    assert!(!document.items.iter().any(|item| item.id == added.id));
    // a zero-amount row leaves the totals alone
    assert_eq!(next.totals, document.totals);
  }

  #[test]
  fn test_add_item_never_reuses_ids() {
    let document = InvoiceDocument::seeded(today());
    let first = document.add_item();
    let second = first.add_item();
    let mut ids: Vec<Uuid> = second.items.iter().map(|item| item.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), second.items.len());
  }

  #[test]
  fn test_delete_item_removes_only_the_target() {
    let document = InvoiceDocument::seeded(today());
    let target = document.items[0].id;
    let next = document.delete_item(target).unwrap();

    assert_eq!(next.items.len(), 1);
    assert_eq!(next.items[0], document.items[1]);
    assert_eq!(next.totals.subtotal, dec!(1500));
  }

  #[test]
  fn test_delete_item_refuses_the_last_row() {
    let document = InvoiceDocument::seeded(today());
    let one_left = document.delete_item(document.items[0].id).unwrap();
    let last = one_left.items[0].id;

    let result = one_left.delete_item(last);
    assert!(matches!(result, Err(InvoiceError::LastLineItem)));
    assert_eq!(one_left.items.len(), 1);
  }

  #[test]
  fn test_delete_item_rejects_unknown_ids() {
    let document = InvoiceDocument::seeded(today());
    let result = document.delete_item(Uuid::new_v4());
    assert!(matches!(result, Err(InvoiceError::LineItemNotFound(_))));
  }

  #[test]
  fn test_update_item_description_is_verbatim() {
    let document = InvoiceDocument::seeded(today());
    let id = document.items[0].id;

    let next = document
      .update_item_field(id, ItemField::Description, "  Discovery workshop  ")
      .unwrap();
    assert_eq!(next.items[0].description, "  Discovery workshop  ");

    let cleared = next.update_item_field(id, ItemField::Description, "").unwrap();
    assert_eq!(cleared.items[0].description, "");
  }

  #[test]
  fn test_update_item_numeric_fields_fall_back_to_zero() {
    let document = InvoiceDocument::seeded(today());
    let id = document.items[0].id;

    let next = document
      .update_item_field(id, ItemField::Quantity, "abc")
      .unwrap();
    assert_eq!(next.items[0].quantity, Decimal::ZERO);
    assert_eq!(next.totals.subtotal, dec!(1500));

    let priced = next
      .update_item_field(id, ItemField::UnitPrice, "19.99")
      .unwrap();
    assert_eq!(priced.items[0].unit_price, dec!(19.99));
  }

  #[test]
  fn test_update_item_leaves_other_rows_untouched() {
    let document = InvoiceDocument::seeded(today());
    let id = document.items[0].id;
    let untouched_before = document.items[1].clone();

    let next = document
      .update_item_field(id, ItemField::Quantity, "3")
      .unwrap();
    assert_eq!(next.items[1], untouched_before);
  }

  #[test]
  fn test_transitions_never_mutate_the_source() {
    let document = InvoiceDocument::seeded(today());
    let snapshot = document.clone();

    let _ = document.add_item();
    let _ = document.delete_item(document.items[0].id);
    let _ = document.update_item_field(document.items[0].id, ItemField::Quantity, "99");
    let _ = document.update_detail(&DetailTarget::TaxRate, "50");

    assert_eq!(document, snapshot);
  }

  #[test]
  fn test_update_detail_party_fields() {
    let document = InvoiceDocument::seeded(today());
    let target = DetailTarget::Party {
      section: PartySection::Recipient,
      field: PartyField::Name,
    };
    let next = document.update_detail(&target, "Acme Corp").unwrap();
    assert_eq!(next.recipient.name, "Acme Corp");
    assert_eq!(next.sender.name, document.sender.name);
  }

  #[test]
  fn test_update_detail_tax_rate_recomputes_totals() {
    let document = InvoiceDocument::seeded(today());
    let next = document.update_detail(&DetailTarget::TaxRate, "10").unwrap();
    assert_eq!(next.tax_rate, dec!(10));
    assert_eq!(next.totals.tax_amount, dec!(270));
    assert_eq!(next.totals.total, dec!(2970));

    let cleared = next.update_detail(&DetailTarget::TaxRate, "n/a").unwrap();
    assert_eq!(cleared.tax_rate, Decimal::ZERO);
    assert_eq!(cleared.totals.total, cleared.totals.subtotal);
  }

  #[test]
  fn test_extreme_magnitudes_saturate_the_totals() {
    let document = InvoiceDocument::seeded(today());
    let id = document.items[0].id;

    let widened = document
      .apply(&Edit::UpdateItemField {
        id,
        field: ItemField::Quantity,
        value: "1e20".to_string(),
      })
      .unwrap();
    let priced = widened
      .apply(&Edit::UpdateItemField {
        id,
        field: ItemField::UnitPrice,
        value: "1e10".to_string(),
      })
      .unwrap();
    assert_eq!(priced.items[0].amount(), Decimal::MAX);
    assert_eq!(priced.totals.subtotal, Decimal::MAX);
    assert_eq!(priced.totals.total, Decimal::MAX);

    let taxed = priced
      .apply(&Edit::UpdateDetail {
        target: DetailTarget::TaxRate,
        value: "1e27".to_string(),
      })
      .unwrap();
    assert_eq!(taxed.tax_rate, Decimal::from_scientific("1e27").unwrap());
    assert_eq!(taxed.totals.total, Decimal::MAX);

    // a rate too large even to parse falls back to zero
    let zeroed = taxed
      .apply(&Edit::UpdateDetail {
        target: DetailTarget::TaxRate,
        value: "1e30".to_string(),
      })
      .unwrap();
    assert_eq!(zeroed.tax_rate, Decimal::ZERO);
    assert_eq!(zeroed.totals.total, zeroed.totals.subtotal);
  }

  #[test]
  fn test_update_detail_currency_rejects_unknown_codes() {
    let document = InvoiceDocument::seeded(today());
    let target = DetailTarget::Details {
      field: DetailsField::Currency,
    };

    let next = document.update_detail(&target, "EUR").unwrap();
    assert_eq!(next.invoice_details.currency, Currency::EUR);
    // display currency never changes the stored amounts
    assert_eq!(next.totals, document.totals);

    let result = document.update_detail(&target, "XYZ");
    assert!(matches!(result, Err(InvoiceError::Validation(_))));
  }

  #[test]
  fn test_update_detail_dates_must_be_iso() {
    let document = InvoiceDocument::seeded(today());
    let target = DetailTarget::Details {
      field: DetailsField::DueDate,
    };

    let next = document.update_detail(&target, "2025-07-15").unwrap();
    assert_eq!(
      next.invoice_details.due_date,
      NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    );

    let result = document.update_detail(&target, "15/07/2025");
    assert!(matches!(result, Err(InvoiceError::Validation(_))));
  }

  #[test]
  fn test_update_detail_notes_is_verbatim() {
    let document = InvoiceDocument::seeded(today());
    let next = document
      .update_detail(&DetailTarget::Notes, "Payment due within 7 days.")
      .unwrap();
    assert_eq!(next.notes, "Payment due within 7 days.");
    assert_eq!(next.totals, document.totals);
  }

  #[test]
  fn test_apply_dispatches_every_edit() {
    let document = InvoiceDocument::seeded(today());

    let added = document.apply(&Edit::AddItem).unwrap();
    assert_eq!(added.items.len(), 3);

    let removed = document
      .apply(&Edit::DeleteItem {
        id: document.items[1].id,
      })
      .unwrap();
    assert_eq!(removed.items.len(), 1);

    let renamed = document
      .apply(&Edit::UpdateItemField {
        id: document.items[0].id,
        field: ItemField::Description,
        value: "Kickoff".to_string(),
      })
      .unwrap();
    assert_eq!(renamed.items[0].description, "Kickoff");

    let noted = document
      .apply(&Edit::UpdateDetail {
        target: DetailTarget::Notes,
        value: "Net 7".to_string(),
      })
      .unwrap();
    assert_eq!(noted.notes, "Net 7");
  }

  #[test]
  fn test_serializes_with_wire_field_names() {
    let document = InvoiceDocument::seeded(today());
    let json = serde_json::to_value(&document).unwrap();

    assert!(json.get("invoiceDetails").is_some());
    assert!(json.get("taxRate").is_some());
    assert!(json.get("subtotal").is_some());
    assert!(json.get("taxAmount").is_some());
    assert!(json.get("total").is_some());
    assert_eq!(json["invoiceDetails"]["currency"], "USD");
    assert!(json["items"][0].get("unitPrice").is_some());
    assert_eq!(json["items"][0]["quantity"], "1");
  }
}
