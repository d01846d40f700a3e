use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::InvoiceError;
use crate::domain::invoice::edits::{Edit, ItemField};
use crate::domain::invoice::ports::DocumentStore;

use super::get_document::DocumentResponse;

#[derive(Debug, Deserialize)]
pub struct UpdateLineItemCommand {
  pub item_id: Uuid,
  pub field: String,
  pub value: String,
}

pub struct UpdateLineItemUseCase {
  document_store: Arc<dyn DocumentStore>,
}

impl UpdateLineItemUseCase {
  pub fn new(document_store: Arc<dyn DocumentStore>) -> Self {
    Self { document_store }
  }

  pub async fn execute(
    &self,
    command: UpdateLineItemCommand,
  ) -> Result<DocumentResponse, InvoiceError> {
    let field = ItemField::from_str(&command.field)?;
    let document = self
      .document_store
      .apply(Edit::UpdateItemField {
        id: command.item_id,
        field,
        value: command.value,
      })
      .await?;
    Ok(DocumentResponse::from_document(&document))
  }
}
