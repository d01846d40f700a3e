use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::invoice::document::InvoiceDocument;
use crate::domain::invoice::edits::Edit;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::ports::DocumentStore;

/// In-memory implementation of the DocumentStore trait
///
/// Holds exactly one document behind a lock. An edit computes its successor
/// on a detached copy and the write guard covers only the swap, so concurrent
/// editors always observe some complete document state, never a partial one.
/// The value lives and dies with the process.
pub struct InMemoryDocumentStore {
  document: RwLock<InvoiceDocument>,
}

impl InMemoryDocumentStore {
  pub fn new(document: InvoiceDocument) -> Self {
    Self {
      document: RwLock::new(document),
    }
  }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
  async fn snapshot(&self) -> Result<InvoiceDocument, InvoiceError> {
    let guard = self
      .document
      .read()
      .map_err(|_| InvoiceError::Store("document lock poisoned".to_string()))?;
    Ok(guard.clone())
  }

  async fn apply(&self, edit: Edit) -> Result<InvoiceDocument, InvoiceError> {
    let current = self.snapshot().await?;
    let next = current.apply(&edit)?;
    let mut guard = self
      .document
      .write()
      .map_err(|_| InvoiceError::Store("document lock poisoned".to_string()))?;
    *guard = next.clone();
    Ok(next)
  }
}
