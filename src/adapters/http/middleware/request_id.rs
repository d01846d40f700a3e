use actix_web::{
  Error, HttpMessage,
  body::MessageBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
};
use uuid::Uuid;

/// Request ID middleware
///
/// Tags every request with a UUID: reuses a valid incoming `X-Request-ID`
/// header (so a proxy in front keeps its correlation id), otherwise generates
/// a fresh v4. The id is stored in request extensions, recorded on the
/// current tracing span and echoed back in the response headers.
#[derive(Debug, Clone, Default)]
pub struct RequestIdMiddleware;

impl RequestIdMiddleware {
  pub fn new() -> Self {
    Self
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = RequestIdMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequestIdMiddlewareService {
      service: Rc::new(service),
    }))
  }
}

pub struct RequestIdMiddlewareService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);

    Box::pin(async move {
      let incoming = req
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok());
      let request_id = RequestId(incoming.unwrap_or_else(Uuid::new_v4));

      // Store request ID in extensions for logging/tracing
      req.extensions_mut().insert(request_id);
      tracing::Span::current().record("request_id", request_id.0.to_string());

      let mut res = service.call(req).await?;

      // Echo request ID back in response headers
      res.headers_mut().insert(
        actix_web::http::header::HeaderName::from_static("x-request-id"),
        actix_web::http::header::HeaderValue::from_str(&request_id.0.to_string())
          .unwrap_or_else(|_| actix_web::http::header::HeaderValue::from_static("invalid-uuid")),
      );

      Ok(res)
    })
  }
}

/// Request ID wrapper for UUID, stored in request extensions.
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub Uuid);

impl std::fmt::Display for RequestId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App, HttpResponse,
    test::{self, TestRequest},
    web,
  };

  async fn test_handler(req: actix_web::HttpRequest) -> HttpResponse {
    let request_id = req.extensions().get::<RequestId>().copied();
    assert!(request_id.is_some());
    HttpResponse::Ok().finish()
  }

  #[actix_web::test]
  async fn test_generates_a_request_id() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(test_handler)),
    )
    .await;

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp.headers().get("x-request-id").unwrap();
    let request_id_str = request_id.to_str().unwrap();
    assert!(Uuid::parse_str(request_id_str).is_ok());
  }

  #[actix_web::test]
  async fn test_reuses_a_valid_incoming_id() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(test_handler)),
    )
    .await;

    let id = Uuid::new_v4();
    let req = TestRequest::get()
      .uri("/")
      .insert_header(("x-request-id", id.to_string()))
      .to_request();
    let resp = test::call_service(&app, req).await;

    let echoed = resp.headers().get("x-request-id").unwrap();
    assert_eq!(echoed.to_str().unwrap(), id.to_string());
  }

  #[actix_web::test]
  async fn test_replaces_an_invalid_incoming_id() {
    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(test_handler)),
    )
    .await;

    let req = TestRequest::get()
      .uri("/")
      .insert_header(("x-request-id", "not-a-uuid"))
      .to_request();
    let resp = test::call_service(&app, req).await;

    let echoed = resp.headers().get("x-request-id").unwrap();
    assert!(Uuid::parse_str(echoed.to_str().unwrap()).is_ok());
  }
}
