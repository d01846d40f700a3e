use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use uuid::Uuid;

use crate::domain::invoice::document::InvoiceDocument;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::ports::PdfGenerator;

/// Shells out to wkhtmltopdf against the server's own printable view.
pub struct WkHtmlToPdfGenerator {
  pdf_output_dir: PathBuf,
  wkhtmltopdf_path: String,
  server_base_url: String,
}

impl WkHtmlToPdfGenerator {
  pub fn new(
    pdf_output_dir: PathBuf,
    wkhtmltopdf_path: Option<String>,
    server_base_url: String,
  ) -> Self {
    // Create output directory if doesn't exist
    std::fs::create_dir_all(&pdf_output_dir).ok();

    let wkhtmltopdf_path = wkhtmltopdf_path.unwrap_or_else(|| "wkhtmltopdf".to_string());

    Self {
      pdf_output_dir,
      wkhtmltopdf_path,
      server_base_url,
    }
  }

  async fn verify_wkhtmltopdf_installed(&self) -> Result<(), InvoiceError> {
    let output = Command::new(&self.wkhtmltopdf_path)
      .arg("--version")
      .output()
      .await
      .map_err(|e| {
        InvoiceError::PdfGenerationFailed(format!(
          "wkhtmltopdf not found: {}. Please install wkhtmltopdf.",
          e
        ))
      })?;

    if !output.status.success() {
      return Err(InvoiceError::PdfGenerationFailed(
        "wkhtmltopdf is not working correctly".to_string(),
      ));
    }

    Ok(())
  }
}

#[async_trait]
impl PdfGenerator for WkHtmlToPdfGenerator {
  async fn generate_pdf(&self, document: &InvoiceDocument) -> Result<String, InvoiceError> {
    // Verify wkhtmltopdf is available
    self.verify_wkhtmltopdf_installed().await?;

    // The printable page always shows the current document, which is the
    // same snapshot the caller handed us.
    let print_url = format!("{}/print", self.server_base_url);
    tracing::info!(
      "Generating PDF for invoice {} from URL: {}",
      document.invoice_details.number,
      print_url
    );

    // Invoice numbers are free text, so name the file after a fresh id
    // instead of trusting them as filenames.
    let pdf_filename = format!("{}.pdf", Uuid::new_v4());
    let output_path = self.pdf_output_dir.join(&pdf_filename);
    let output_arg = output_path.to_string_lossy().to_string();

    let output = Command::new(&self.wkhtmltopdf_path)
      .args([
        "--page-size",
        "A4",
        "--margin-top",
        "10mm",
        "--margin-bottom",
        "10mm",
        "--margin-left",
        "10mm",
        "--margin-right",
        "10mm",
        "--quiet", // Suppress verbose output
        &print_url,
        &output_arg,
      ])
      .output()
      .await
      .map_err(|e| {
        InvoiceError::PdfGenerationFailed(format!("wkhtmltopdf execution failed: {}", e))
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(InvoiceError::PdfGenerationFailed(format!(
        "wkhtmltopdf failed: {}",
        stderr
      )));
    }

    if !output_path.exists() {
      return Err(InvoiceError::PdfGenerationFailed(
        "PDF file was not created".to_string(),
      ));
    }

    Ok(output_arg)
  }
}
