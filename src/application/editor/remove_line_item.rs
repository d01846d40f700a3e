use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::InvoiceError;
use crate::domain::invoice::edits::Edit;
use crate::domain::invoice::ports::DocumentStore;

use super::get_document::DocumentResponse;

#[derive(Debug, Deserialize)]
pub struct RemoveLineItemCommand {
  pub item_id: Uuid,
}

pub struct RemoveLineItemUseCase {
  document_store: Arc<dyn DocumentStore>,
}

impl RemoveLineItemUseCase {
  pub fn new(document_store: Arc<dyn DocumentStore>) -> Self {
    Self { document_store }
  }

  pub async fn execute(
    &self,
    command: RemoveLineItemCommand,
  ) -> Result<DocumentResponse, InvoiceError> {
    let document = self
      .document_store
      .apply(Edit::DeleteItem {
        id: command.item_id,
      })
      .await?;
    Ok(DocumentResponse::from_document(&document))
  }
}
