use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::invoice::document::InvoiceDocument;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::ports::InvoiceSubmitter;

/// Posts the document snapshot as JSON to a configured endpoint.
///
/// Submission runs on a best-effort basis: the print path fires it off and
/// moves on, so a slow or failing endpoint can never block a printout. The
/// client timeout is the only backstop against an endpoint that hangs.
pub struct HttpInvoiceSubmitter {
  client: Client,
  endpoint_url: String,
}

impl HttpInvoiceSubmitter {
  pub fn new(endpoint_url: String, timeout: Duration) -> Result<Self, InvoiceError> {
    let client = Client::builder().timeout(timeout).build().map_err(|e| {
      InvoiceError::SubmissionFailed(format!("Failed to build HTTP client: {}", e))
    })?;

    Ok(Self {
      client,
      endpoint_url,
    })
  }
}

#[async_trait]
impl InvoiceSubmitter for HttpInvoiceSubmitter {
  async fn submit(&self, document: &InvoiceDocument) -> Result<(), InvoiceError> {
    let response = self
      .client
      .post(&self.endpoint_url)
      .json(document)
      .send()
      .await
      .map_err(|e| InvoiceError::SubmissionFailed(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(InvoiceError::SubmissionFailed(format!(
        "Endpoint returned status {}: {}",
        status, body
      )));
    }

    tracing::info!(
      "Submitted invoice {} to {}",
      document.invoice_details.number,
      self.endpoint_url
    );
    Ok(())
  }
}
