use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invopad::{
  adapters::http::{
    RequestIdMiddleware, TemplateEngine, configure_editor_routes, configure_web_routes,
  },
  application::editor::{
    AddLineItemUseCase, GetDocumentUseCase, PrintInvoiceUseCase, RemoveLineItemUseCase,
    UpdateDetailUseCase, UpdateLineItemUseCase,
  },
  domain::invoice::document::InvoiceDocument,
  domain::invoice::ports::{DocumentStore, InvoiceSubmitter, PdfGenerator},
  infrastructure::{
    config::Config, pdf::WkHtmlToPdfGenerator, persistence::memory::InMemoryDocumentStore,
    submission::HttpInvoiceSubmitter,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invopad=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting InvoPad application");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Seed the working document and its in-memory store. The document lives
  // for the lifetime of the process; restarting resets it.
  let document = InvoiceDocument::seeded(Utc::now().date_naive());
  tracing::info!(
    "Seeded invoice {} dated {}",
    document.invoice_details.number,
    document.invoice_details.date
  );
  let document_store = Arc::new(InMemoryDocumentStore::new(document)) as Arc<dyn DocumentStore>;

  // Initialize the submission endpoint if one is configured
  let submitter: Option<Arc<dyn InvoiceSubmitter>> =
    if let Some(endpoint_url) = &config.submission.endpoint_url {
      tracing::info!("Invoice submission endpoint configured: {}", endpoint_url);
      Some(Arc::new(
        HttpInvoiceSubmitter::new(
          endpoint_url.clone(),
          Duration::from_secs(config.submission.timeout_seconds),
        )
        .expect("Failed to create invoice submitter"),
      ))
    } else {
      tracing::warn!("No submission endpoint configured, printing will skip submission");
      None
    };

  // Initialize PDF generator
  let pdf_generator = Arc::new(WkHtmlToPdfGenerator::new(
    PathBuf::from(&config.pdf.output_dir),
    config.pdf.wkhtmltopdf_path.clone(),
    config.server.base_url.clone(),
  )) as Arc<dyn PdfGenerator>;
  tracing::info!("PDF generator initialized");

  // Initialize use cases
  let get_document_use_case = Arc::new(GetDocumentUseCase::new(document_store.clone()));
  let add_item_use_case = Arc::new(AddLineItemUseCase::new(document_store.clone()));
  let remove_item_use_case = Arc::new(RemoveLineItemUseCase::new(document_store.clone()));
  let update_item_use_case = Arc::new(UpdateLineItemUseCase::new(document_store.clone()));
  let update_detail_use_case = Arc::new(UpdateDetailUseCase::new(document_store.clone()));
  let print_use_case = Arc::new(PrintInvoiceUseCase::new(
    document_store.clone(),
    submitter.clone(),
    pdf_generator.clone(),
  ));

  // Initialize template engine
  let templates = TemplateEngine::new().expect("Failed to initialize template engine");
  tracing::info!("Template engine initialized");

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Configure web UI routes
      .configure(|cfg| configure_web_routes(cfg, templates.clone(), get_document_use_case.clone()))
      // Configure API routes
      .service(web::scope("/api/v1/invoice").configure(|cfg| {
        configure_editor_routes(
          cfg,
          get_document_use_case.clone(),
          add_item_use_case.clone(),
          remove_item_use_case.clone(),
          update_item_use_case.clone(),
          update_detail_use_case.clone(),
          print_use_case.clone(),
        )
      }))
      // Static files
      .service(fs::Files::new("/static", "./static"))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
