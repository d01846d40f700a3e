use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::{
  dtos::{UpdateDetailRequest, UpdateItemRequest},
  errors::ApiError,
};
use crate::application::editor::{
  AddLineItemUseCase, GetDocumentUseCase, PrintInvoiceUseCase, RemoveLineItemCommand,
  RemoveLineItemUseCase, UpdateDetailCommand, UpdateDetailUseCase, UpdateLineItemCommand,
  UpdateLineItemUseCase,
};

/// Handler for fetching the current document
///
/// GET /api/v1/invoice
/// Response: DocumentResponse (JSON) with status 200
pub async fn get_document(
  use_case: web::Data<Arc<GetDocumentUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Handler for appending a blank line item
///
/// POST /api/v1/invoice/items
/// Response: DocumentResponse (JSON) with status 201
pub async fn add_item(
  use_case: web::Data<Arc<AddLineItemUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;
  Ok(HttpResponse::Created().json(response))
}

/// Handler for removing a line item
///
/// DELETE /api/v1/invoice/items/{item_id}
/// Response: DocumentResponse (JSON) with status 200,
/// 409 when the target is the last remaining item
pub async fn remove_item(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<RemoveLineItemUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = RemoveLineItemCommand {
    item_id: path.into_inner(),
  };
  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Handler for overwriting one field of a line item
///
/// PUT /api/v1/invoice/items/{item_id}
/// Body: UpdateItemRequest (JSON)
/// Response: DocumentResponse (JSON) with status 200
pub async fn update_item(
  path: web::Path<Uuid>,
  request: web::Json<UpdateItemRequest>,
  use_case: web::Data<Arc<UpdateLineItemUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = UpdateLineItemCommand {
    item_id: path.into_inner(),
    field: request.field.clone(),
    value: request.value.clone(),
  };
  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Handler for overwriting one header field of the document
///
/// PUT /api/v1/invoice/details
/// Body: UpdateDetailRequest (JSON)
/// Response: DocumentResponse (JSON) with status 200
pub async fn update_detail(
  request: web::Json<UpdateDetailRequest>,
  use_case: web::Data<Arc<UpdateDetailUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = UpdateDetailCommand {
    section: request.section.clone(),
    field: request.field.clone(),
    value: request.value.clone(),
  };
  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Handler for the print action
///
/// POST /api/v1/invoice/print
/// Response: PrintInvoiceResponse (JSON) with status 200. Submission runs in
/// the background and never affects this response.
pub async fn print_invoice(
  use_case: web::Data<Arc<PrintInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;
  Ok(HttpResponse::Ok().json(response))
}
