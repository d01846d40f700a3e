use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::InvoiceError;
use crate::domain::invoice::document::InvoiceDocument;
use crate::domain::invoice::ports::DocumentStore;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDto {
  pub name: String,
  pub address: String,
  pub city: String,
  pub email: String,
  pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetailsDto {
  pub number: String,
  pub date: NaiveDate,
  pub due_date: NaiveDate,
  pub currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDto {
  pub id: Uuid,
  pub description: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
  pub amount: Decimal,
}

/// Full document snapshot as every editor endpoint returns it, so the client
/// can re-render rows and totals from one payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
  pub sender: PartyDto,
  pub recipient: PartyDto,
  pub invoice_details: InvoiceDetailsDto,
  pub items: Vec<LineItemDto>,
  pub tax_rate: Decimal,
  pub notes: String,
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

impl DocumentResponse {
  pub fn from_document(document: &InvoiceDocument) -> Self {
    let items = document
      .items
      .iter()
      .map(|item| LineItemDto {
        id: item.id,
        description: item.description.clone(),
        quantity: item.quantity,
        unit_price: item.unit_price,
        amount: item.amount(),
      })
      .collect();

    Self {
      sender: PartyDto {
        name: document.sender.name.clone(),
        address: document.sender.address.clone(),
        city: document.sender.city.clone(),
        email: document.sender.email.clone(),
        phone: document.sender.phone.clone(),
      },
      recipient: PartyDto {
        name: document.recipient.name.clone(),
        address: document.recipient.address.clone(),
        city: document.recipient.city.clone(),
        email: document.recipient.email.clone(),
        phone: document.recipient.phone.clone(),
      },
      invoice_details: InvoiceDetailsDto {
        number: document.invoice_details.number.clone(),
        date: document.invoice_details.date,
        due_date: document.invoice_details.due_date,
        currency: document.invoice_details.currency.as_str().to_string(),
      },
      items,
      tax_rate: document.tax_rate,
      notes: document.notes.clone(),
      subtotal: document.totals.subtotal,
      tax_amount: document.totals.tax_amount,
      total: document.totals.total,
    }
  }
}

pub struct GetDocumentUseCase {
  document_store: Arc<dyn DocumentStore>,
}

impl GetDocumentUseCase {
  pub fn new(document_store: Arc<dyn DocumentStore>) -> Self {
    Self { document_store }
  }

  pub async fn execute(&self) -> Result<DocumentResponse, InvoiceError> {
    let document = self.document_store.snapshot().await?;
    Ok(DocumentResponse::from_document(&document))
  }
}
