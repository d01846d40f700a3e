use std::str::FromStr;
use uuid::Uuid;

use super::value_objects::ValueObjectError;

/// One editing gesture against the document. Every variant maps to a single
/// all-or-nothing transition; totals are derived and have no variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
  AddItem,
  DeleteItem { id: Uuid },
  UpdateItemField {
    id: Uuid,
    field: ItemField,
    value: String,
  },
  UpdateDetail {
    target: DetailTarget,
    value: String,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
  Description,
  Quantity,
  UnitPrice,
}

impl FromStr for ItemField {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "description" => Ok(ItemField::Description),
      "quantity" | "qty" => Ok(ItemField::Quantity),
      "unitprice" | "unit_price" => Ok(ItemField::UnitPrice),
      _ => Err(ValueObjectError::UnknownItemField(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartySection {
  Sender,
  Recipient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyField {
  Name,
  Address,
  City,
  Email,
  Phone,
}

impl FromStr for PartyField {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "name" => Ok(PartyField::Name),
      "address" => Ok(PartyField::Address),
      "city" => Ok(PartyField::City),
      "email" => Ok(PartyField::Email),
      "phone" => Ok(PartyField::Phone),
      _ => Err(ValueObjectError::UnknownPartyField(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsField {
  Number,
  Date,
  DueDate,
  Currency,
}

impl FromStr for DetailsField {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "number" => Ok(DetailsField::Number),
      "date" => Ok(DetailsField::Date),
      "duedate" | "due_date" => Ok(DetailsField::DueDate),
      "currency" => Ok(DetailsField::Currency),
      _ => Err(ValueObjectError::UnknownDetailField(s.to_string())),
    }
  }
}

/// Where a detail edit lands. Party and invoice-detail sections address a
/// named field inside them; tax rate and notes are scalar sections, so any
/// field qualifier on the wire is ignored for those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailTarget {
  Party {
    section: PartySection,
    field: PartyField,
  },
  Details { field: DetailsField },
  TaxRate,
  Notes,
}

impl DetailTarget {
  pub fn resolve(section: &str, field: &str) -> Result<Self, ValueObjectError> {
    match section.trim().to_lowercase().as_str() {
      "sender" => Ok(DetailTarget::Party {
        section: PartySection::Sender,
        field: PartyField::from_str(field)?,
      }),
      "recipient" => Ok(DetailTarget::Party {
        section: PartySection::Recipient,
        field: PartyField::from_str(field)?,
      }),
      "invoicedetails" | "invoice_details" | "details" => Ok(DetailTarget::Details {
        field: DetailsField::from_str(field)?,
      }),
      "taxrate" | "tax_rate" => Ok(DetailTarget::TaxRate),
      "notes" => Ok(DetailTarget::Notes),
      _ => Err(ValueObjectError::UnknownSection(section.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_item_field_from_str() {
    assert_eq!(ItemField::from_str("description").unwrap(), ItemField::Description);
    assert_eq!(ItemField::from_str("unitPrice").unwrap(), ItemField::UnitPrice);
    assert_eq!(ItemField::from_str("unit_price").unwrap(), ItemField::UnitPrice);
    assert_eq!(ItemField::from_str("qty").unwrap(), ItemField::Quantity);
    assert!(ItemField::from_str("amount").is_err());
  }

  #[test]
  fn test_resolve_party_targets() {
    let target = DetailTarget::resolve("sender", "email").unwrap();
    assert_eq!(
      target,
      DetailTarget::Party {
        section: PartySection::Sender,
        field: PartyField::Email,
      }
    );
    let target = DetailTarget::resolve("recipient", "city").unwrap();
    assert_eq!(
      target,
      DetailTarget::Party {
        section: PartySection::Recipient,
        field: PartyField::City,
      }
    );
  }

  #[test]
  fn test_resolve_detail_targets() {
    let target = DetailTarget::resolve("invoiceDetails", "dueDate").unwrap();
    assert_eq!(
      target,
      DetailTarget::Details {
        field: DetailsField::DueDate,
      }
    );
  }

  #[test]
  fn test_scalar_sections_ignore_the_field() {
    assert_eq!(
      DetailTarget::resolve("taxRate", "whatever").unwrap(),
      DetailTarget::TaxRate
    );
    assert_eq!(DetailTarget::resolve("notes", "").unwrap(), DetailTarget::Notes);
  }

  #[test]
  fn test_unknown_section_and_field_are_rejected() {
    assert!(DetailTarget::resolve("footer", "text").is_err());
    assert!(DetailTarget::resolve("sender", "fax").is_err());
    assert!(DetailTarget::resolve("invoiceDetails", "status").is_err());
  }
}
