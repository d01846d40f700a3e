use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::invoice::errors::InvoiceError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Requested entity does not exist (404 Not Found)
  NotFound(String),

  /// Edit conflicts with a document rule (409 Conflict)
  Conflict(String),

  /// External collaborator failed (502 Bad Gateway)
  Upstream(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::Conflict(msg) => ("conflict", msg.clone()),
      ApiError::Upstream(msg) => {
        tracing::error!("Upstream error: {}", msg);
        ("upstream_error", msg.clone())
      }
      ApiError::Internal(msg) => {
        // Don't expose internal error details in production
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert InvoiceError to ApiError
impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Validation(err) => ApiError::Validation(err.to_string()),
      InvoiceError::LineItemNotFound(id) => {
        ApiError::NotFound(format!("Line item not found: {}", id))
      }
      InvoiceError::LastLineItem => {
        ApiError::Conflict("Cannot delete the last line item".to_string())
      }
      InvoiceError::SubmissionFailed(msg) => ApiError::Upstream(msg),
      InvoiceError::PdfGenerationFailed(msg) => {
        ApiError::Internal(format!("PDF generation failed: {}", msg))
      }
      InvoiceError::Store(msg) => ApiError::Internal(msg),
      InvoiceError::Internal(msg) => ApiError::Internal(msg),
    }
  }
}
