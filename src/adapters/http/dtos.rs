use serde::{Deserialize, Serialize};

/// Request to overwrite one field of a line item
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemRequest {
  /// Field name: "description", "quantity" or "unitPrice"
  pub field: String,

  /// Raw value as typed; numeric fields fall back to zero when unparseable
  pub value: String,
}

/// Request to overwrite one header field of the document
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDetailRequest {
  /// Section name: "sender", "recipient", "invoiceDetails", "taxRate" or "notes"
  pub section: String,

  /// Field within the section; ignored for the scalar sections
  #[serde(default)]
  pub field: Option<String>,

  /// Raw value as typed
  pub value: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
