use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::errors::ApiError;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::editor::GetDocumentUseCase;
use crate::domain::invoice::value_objects::Currency;

fn currency_codes() -> Vec<&'static str> {
  Currency::all().iter().map(|c| c.as_str()).collect()
}

/// Render the invoice editor page
///
/// GET /
pub async fn editor_page(
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<GetDocumentUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let document = use_case.execute().await?;

  let mut context = tera::Context::new();
  context.insert("title", "Invoice Editor");
  context.insert("document", &document);
  context.insert("currencies", &currency_codes());

  let html = templates
    .render("pages/editor.html.tera", &context)
    .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Render the printable invoice view
///
/// GET /print
///
/// This page is also what the PDF generator captures, so it carries no
/// editing controls.
pub async fn print_page(
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<GetDocumentUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let document = use_case.execute().await?;

  let mut context = tera::Context::new();
  context.insert("title", &format!("Invoice {}", document.invoice_details.number));
  context.insert("document", &document);

  let html = templates
    .render("pages/print.html.tera", &context)
    .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
