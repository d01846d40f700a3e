use super::value_objects::ValueObjectError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Line item not found: {0}")]
  LineItemNotFound(Uuid),

  #[error("Cannot delete the last line item")]
  LastLineItem,

  #[error("Submission failed: {0}")]
  SubmissionFailed(String),

  #[error("PDF generation failed: {0}")]
  PdfGenerationFailed(String),

  #[error("Document store error: {0}")]
  Store(String),

  #[error("Internal error: {0}")]
  Internal(String),
}
