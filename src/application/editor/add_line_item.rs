use std::sync::Arc;

use crate::domain::invoice::InvoiceError;
use crate::domain::invoice::edits::Edit;
use crate::domain::invoice::ports::DocumentStore;

use super::get_document::DocumentResponse;

pub struct AddLineItemUseCase {
  document_store: Arc<dyn DocumentStore>,
}

impl AddLineItemUseCase {
  pub fn new(document_store: Arc<dyn DocumentStore>) -> Self {
    Self { document_store }
  }

  pub async fn execute(&self) -> Result<DocumentResponse, InvoiceError> {
    let document = self.document_store.apply(Edit::AddItem).await?;
    Ok(DocumentResponse::from_document(&document))
  }
}
