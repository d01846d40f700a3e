use async_trait::async_trait;

use super::document::InvoiceDocument;
use super::edits::Edit;
use super::errors::InvoiceError;

/// Holds the single editable document for the session.
#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Current document value.
  async fn snapshot(&self) -> Result<InvoiceDocument, InvoiceError>;
  /// Run one edit against the stored document and return the new value.
  /// A rejected edit leaves the stored document exactly as it was.
  async fn apply(&self, edit: Edit) -> Result<InvoiceDocument, InvoiceError>;
}

/// Pushes a finished document snapshot to an external endpoint.
#[async_trait]
pub trait InvoiceSubmitter: Send + Sync {
  async fn submit(&self, document: &InvoiceDocument) -> Result<(), InvoiceError>;
}

/// Renders a document snapshot into a PDF file and returns its path.
#[async_trait]
pub trait PdfGenerator: Send + Sync {
  async fn generate_pdf(&self, document: &InvoiceDocument) -> Result<String, InvoiceError>;
}
