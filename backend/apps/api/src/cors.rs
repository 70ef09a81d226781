//! Cross-origin policy
//!
//! Browsers on an allow-listed origin may make credentialed calls. Requests
//! whose `Origin` is not on the list are refused outright.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// CORS layer for the configured allow-list
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins.to_vec())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

/// Origins allowed past [`reject_foreign_origin`]
#[derive(Clone, Debug)]
pub struct OriginAllowList(Arc<[HeaderValue]>);

impl OriginAllowList {
    pub fn new(origins: Vec<HeaderValue>) -> Self {
        Self(origins.into())
    }

    pub fn allows(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }
}

/// Middleware refusing requests from origins outside the allow-list
///
/// Requests without an `Origin` header (curl, server-to-server) pass.
pub async fn reject_foreign_origin(
    State(allow_list): State<OriginAllowList>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(origin) = req.headers().get(header::ORIGIN)
        && !allow_list.allows(origin)
    {
        tracing::warn!(origin = ?origin, path = %req.uri().path(), "Rejected foreign origin");
        return AppError::forbidden("Origin not allowed").into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    const ALLOWED: &str = "http://localhost:3000";

    fn app() -> Router {
        let origins = vec![HeaderValue::from_static(ALLOWED)];
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(cors_layer(&origins))
            .layer(axum::middleware::from_fn_with_state(
                OriginAllowList::new(origins),
                reject_foreign_origin,
            ))
    }

    fn get_from(origin: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/ping");
        if let Some(origin) = origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_allowed_origin_gets_credentialed_cors() {
        let response = app().oneshot(get_from(Some(ALLOWED))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_foreign_origin_is_forbidden() {
        let response = app()
            .oneshot(get_from(Some("https://evil.example")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Origin not allowed");
    }

    #[tokio::test]
    async fn test_no_origin_passes() {
        let response = app().oneshot(get_from(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preflight_from_allowed_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/ping")
            .header(header::ORIGIN, ALLOWED)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED);
    }
}
