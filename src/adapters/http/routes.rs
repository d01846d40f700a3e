use actix_web::web;
use std::sync::Arc;

use crate::application::editor::{
  AddLineItemUseCase, GetDocumentUseCase, PrintInvoiceUseCase, RemoveLineItemUseCase,
  UpdateDetailUseCase, UpdateLineItemUseCase,
};

use super::handlers::{editor_api, pages};
use super::templates::TemplateEngine;

/// Configure invoice editor API routes
///
/// Mounts all editing endpoints under the provided scope.
/// All routes are prefixed with the scope path (e.g., /api/v1/invoice).
///
/// # Routes
///
/// - GET / - Fetch the current document
/// - POST /items - Append a blank line item
/// - PUT /items/{item_id} - Overwrite one field of a line item
/// - DELETE /items/{item_id} - Remove a line item
/// - PUT /details - Overwrite one header field
/// - POST /print - Generate the PDF and dispatch submission
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use invopad::application::editor::*;
/// # use invopad::adapters::http::routes::configure_editor_routes;
///
/// # fn example(
/// #   get_document_use_case: Arc<GetDocumentUseCase>,
/// #   add_item_use_case: Arc<AddLineItemUseCase>,
/// #   remove_item_use_case: Arc<RemoveLineItemUseCase>,
/// #   update_item_use_case: Arc<UpdateLineItemUseCase>,
/// #   update_detail_use_case: Arc<UpdateDetailUseCase>,
/// #   print_use_case: Arc<PrintInvoiceUseCase>,
/// # ) {
/// let app = App::new().service(
///   web::scope("/api/v1/invoice").configure(|cfg| {
///     configure_editor_routes(
///       cfg,
///       get_document_use_case,
///       add_item_use_case,
///       remove_item_use_case,
///       update_item_use_case,
///       update_detail_use_case,
///       print_use_case,
///     )
///   }),
/// );
/// # }
/// ```
pub fn configure_editor_routes(
  cfg: &mut web::ServiceConfig,
  get_document_use_case: Arc<GetDocumentUseCase>,
  add_item_use_case: Arc<AddLineItemUseCase>,
  remove_item_use_case: Arc<RemoveLineItemUseCase>,
  update_item_use_case: Arc<UpdateLineItemUseCase>,
  update_detail_use_case: Arc<UpdateDetailUseCase>,
  print_use_case: Arc<PrintInvoiceUseCase>,
) {
  // Store use cases in app data so handlers can access them
  cfg
    .app_data(web::Data::new(get_document_use_case))
    .app_data(web::Data::new(add_item_use_case))
    .app_data(web::Data::new(remove_item_use_case))
    .app_data(web::Data::new(update_item_use_case))
    .app_data(web::Data::new(update_detail_use_case))
    .app_data(web::Data::new(print_use_case))
    // Configure routes
    .route("", web::get().to(editor_api::get_document))
    .route("/items", web::post().to(editor_api::add_item))
    .route("/items/{item_id}", web::put().to(editor_api::update_item))
    .route("/items/{item_id}", web::delete().to(editor_api::remove_item))
    .route("/details", web::put().to(editor_api::update_detail))
    .route("/print", web::post().to(editor_api::print_invoice));
}

/// Configure web UI routes
///
/// # Routes
///
/// - GET / - The invoice editor page
/// - GET /print - The printable invoice view
pub fn configure_web_routes(
  cfg: &mut web::ServiceConfig,
  templates: TemplateEngine,
  get_document_use_case: Arc<GetDocumentUseCase>,
) {
  cfg
    .app_data(web::Data::new(templates))
    .app_data(web::Data::new(get_document_use_case))
    .route("/", web::get().to(pages::editor_page))
    .route("/print", web::get().to(pages::print_page));
}
