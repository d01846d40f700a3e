use serde::Deserialize;
use std::sync::Arc;

use crate::domain::invoice::InvoiceError;
use crate::domain::invoice::edits::{DetailTarget, Edit};
use crate::domain::invoice::ports::DocumentStore;

use super::get_document::DocumentResponse;

/// `field` is optional because the tax rate and notes sections are scalar;
/// for those any supplied field name is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateDetailCommand {
  pub section: String,
  #[serde(default)]
  pub field: Option<String>,
  pub value: String,
}

pub struct UpdateDetailUseCase {
  document_store: Arc<dyn DocumentStore>,
}

impl UpdateDetailUseCase {
  pub fn new(document_store: Arc<dyn DocumentStore>) -> Self {
    Self { document_store }
  }

  pub async fn execute(
    &self,
    command: UpdateDetailCommand,
  ) -> Result<DocumentResponse, InvoiceError> {
    let target = DetailTarget::resolve(&command.section, command.field.as_deref().unwrap_or(""))?;
    let document = self
      .document_store
      .apply(Edit::UpdateDetail {
        target,
        value: command.value,
      })
      .await?;
    Ok(DocumentResponse::from_document(&document))
  }
}
