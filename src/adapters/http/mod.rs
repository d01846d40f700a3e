pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod templates;

// Re-export commonly used types
pub use dtos::{ErrorResponse, UpdateDetailRequest, UpdateItemRequest};
pub use errors::ApiError;
pub use middleware::{RequestId, RequestIdMiddleware};
pub use routes::{configure_editor_routes, configure_web_routes};
pub use templates::TemplateEngine;
