//! Router composition
//!
//! Everything the server mounts, generic over the repositories so the full
//! stack can be driven in tests without a database.

use std::any::Any;
use std::sync::Arc;

use auth::domain::repository::AdminRepository;
use auth::{AuthConfig, AuthGate, TokenService, auth_router};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware, routing::get};
use catalog::catalog_router;
use catalog::domain::repository::BikeRepository;
use contact::contact_router;
use contact::domain::repository::ContactRepository;
use kernel::error::app_error::AppError;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::cors::{OriginAllowList, cors_layer, reject_foreign_origin};

pub const LIVENESS_MESSAGE: &str = "Bike showroom API is running";

/// Store handles for each domain
pub struct Repositories<A, B, C> {
    pub admins: A,
    pub bikes: B,
    pub contacts: C,
}

/// Build the complete application router
pub fn build_app<A, B, C>(
    repos: Repositories<A, B, C>,
    auth_config: AuthConfig,
    allowed_origins: Vec<HeaderValue>,
) -> Router
where
    A: AdminRepository + Clone + Send + Sync + 'static,
    B: BikeRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(TokenService::new(&auth_config));
    let gate = AuthGate::new(tokens.clone());

    let api = Router::new()
        .merge(auth_router(repos.admins, tokens, auth_config))
        .merge(catalog_router(repos.bikes, gate.clone()))
        .merge(contact_router(repos.contacts, gate));

    Router::new()
        .route("/", get(liveness))
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&allowed_origins))
        .layer(middleware::from_fn_with_state(
            OriginAllowList::new(allowed_origins),
            reject_foreign_origin,
        ))
        .layer(TraceLayer::new_for_http())
}

/// GET /
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    tracing::error!(panic = %detail, "Request handler panicked");

    AppError::internal("Request handler panicked").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::domain::entity::admin::Admin;
    use auth::infra::memory::InMemoryAdminRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use catalog::infra::memory::InMemoryBikeRepository;
    use contact::infra::memory::InMemoryContactRepository;
    use kernel::id::AdminId;
    use platform::password::ClearTextPassword;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:3000";
    const PASSWORD: &str = "RideFast2024!";

    struct TestApp {
        router: Router,
        bikes: InMemoryBikeRepository,
        contacts: InMemoryContactRepository,
    }

    fn test_app() -> TestApp {
        let admins = InMemoryAdminRepository::with_admins(vec![Admin {
            admin_id: AdminId::new(1),
            username: "admin".to_string(),
            password_hash: ClearTextPassword::new(PASSWORD.to_string())
                .unwrap()
                .hash(None)
                .unwrap(),
        }]);
        let bikes = InMemoryBikeRepository::new();
        let contacts = InMemoryContactRepository::new();

        let router = build_app(
            Repositories {
                admins,
                bikes: bikes.clone(),
                contacts: contacts.clone(),
            },
            AuthConfig::with_secret(Some("app-secret".into())),
            vec![HeaderValue::from_static(ORIGIN)],
        );

        TestApp {
            router,
            bikes,
            contacts,
        }
    }

    impl TestApp {
        async fn call(
            &self,
            method: &str,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, json)
        }

        async fn login(&self) -> String {
            let (status, body) = self
                .call(
                    "POST",
                    "/api/login",
                    None,
                    Some(json!({ "username": "ADMIN", "password": PASSWORD })),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
            body["token"].as_str().unwrap().to_string()
        }
    }

    fn bike() -> Value {
        json!({
            "url": "https://img.example/interceptor.jpg",
            "name": "Interceptor",
            "model": "650",
            "engine": "648cc",
            "fuel": "Petrol",
            "color": "Orange Crush",
            "warranty": "3 years"
        })
    }

    #[tokio::test]
    async fn test_liveness() {
        let app = test_app();
        let response = app
            .router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], LIVENESS_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = test_app();

        for uri in ["/nope", "/api/nope"] {
            let (status, body) = app.call("GET", uri, None, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "error": "Route not found" }));
        }
    }

    #[tokio::test]
    async fn test_admin_workflow() {
        let app = test_app();
        let token = app.login().await;

        let (status, body) = app
            .call("POST", "/api/verify-token", None, Some(json!({ "token": token })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["username"], "admin");

        let (status, created) = app
            .call("POST", "/api/bikes", Some(&token), Some(bike()))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["bike"]["id"].as_i64().unwrap();

        let (status, listed) = app.call("GET", "/api/bikes", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, _) = app
            .call("DELETE", &format!("/api/bikes/{id}"), Some(&token), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = app
            .call("GET", &format!("/api/bikes/{id}"), None, None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Bike not found" }));
    }

    #[tokio::test]
    async fn test_protected_routes_reject_missing_token() {
        let app = test_app();

        let cases = [
            ("POST", "/api/bikes", Some(bike())),
            ("PUT", "/api/bikes/1", Some(bike())),
            ("DELETE", "/api/bikes/1", None),
            ("GET", "/api/contact-submissions", None),
        ];
        for (method, uri, body) in cases {
            let (status, body) = app.call(method, uri, None, body).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(body, json!({ "error": "Access denied. No token provided." }));
        }

        assert!(app.bikes.is_empty());
    }

    #[tokio::test]
    async fn test_contact_flow() {
        let app = test_app();

        let (status, _) = app
            .call(
                "POST",
                "/api/contact",
                None,
                Some(json!({
                    "name": "Meera",
                    "phone": "555-0100",
                    "email": "meera@example.com",
                    "query": "Do you take trade-ins?"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(app.contacts.len(), 1);

        let token = app.login().await;
        let (status, body) = app
            .call("GET", "/api/contact-submissions", Some(&token), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["email"], "meera@example.com");
    }

    #[tokio::test]
    async fn test_foreign_origin_blocked_before_handlers() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::ORIGIN, "https://evil.example")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "name": "x", "phone": "x", "email": "x", "query": "x" }).to_string(),
            ))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(app.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        async fn boom() -> &'static str {
            panic!("connection string leaked")
        }

        let router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(panic_response));

        let response = router
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
