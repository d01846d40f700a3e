use serde::Serialize;
use std::sync::Arc;

use crate::domain::invoice::InvoiceError;
use crate::domain::invoice::ports::{DocumentStore, InvoiceSubmitter, PdfGenerator};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintInvoiceResponse {
  pub pdf_path: String,
  pub submission_dispatched: bool,
}

/// Produces the printable PDF and, when an endpoint is configured, hands a
/// snapshot of the document to the submitter on a background task.
///
/// Submission is strictly fire-and-forget: it is spawned before the PDF run
/// and never awaited, so its outcome cannot delay or fail the printout. A
/// failed submission surfaces only as a warning in the log.
pub struct PrintInvoiceUseCase {
  document_store: Arc<dyn DocumentStore>,
  submitter: Option<Arc<dyn InvoiceSubmitter>>,
  pdf_generator: Arc<dyn PdfGenerator>,
}

impl PrintInvoiceUseCase {
  pub fn new(
    document_store: Arc<dyn DocumentStore>,
    submitter: Option<Arc<dyn InvoiceSubmitter>>,
    pdf_generator: Arc<dyn PdfGenerator>,
  ) -> Self {
    Self {
      document_store,
      submitter,
      pdf_generator,
    }
  }

  pub async fn execute(&self) -> Result<PrintInvoiceResponse, InvoiceError> {
    let document = self.document_store.snapshot().await?;

    let submission_dispatched = match &self.submitter {
      Some(submitter) => {
        let submitter = Arc::clone(submitter);
        let snapshot = document.clone();
        tokio::spawn(async move {
          if let Err(e) = submitter.submit(&snapshot).await {
            tracing::warn!("Invoice submission failed: {}", e);
          }
        });
        true
      }
      None => {
        tracing::debug!("No submission endpoint configured, skipping submission");
        false
      }
    };

    let pdf_path = self.pdf_generator.generate_pdf(&document).await?;

    Ok(PrintInvoiceResponse {
      pdf_path,
      submission_dispatched,
    })
  }
}
