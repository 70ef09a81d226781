//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::sign_in::prepare_decoy_hash;
use crate::application::token::TokenService;
use crate::domain::repository::AdminRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any administrator repository
pub fn auth_router<R>(repo: R, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    // Hash the decoy now rather than on the first unknown-user login
    prepare_decoy_hash();

    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens,
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/verify-token", post(handlers::verify_token::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::admin::Admin;
    use crate::infra::memory::InMemoryAdminRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use kernel::id::AdminId;
    use platform::password::ClearTextPassword;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const PASSWORD: &str = "RideFast2024!";

    fn app() -> (Router, Arc<TokenService>) {
        let config = Arc::new(AuthConfig::with_secret(Some("router-secret".into())));
        let tokens = Arc::new(TokenService::new(&config));
        let repo = InMemoryAdminRepository::with_admins(vec![Admin {
            admin_id: AdminId::new(1),
            username: "admin".to_string(),
            password_hash: ClearTextPassword::new(PASSWORD.to_string())
                .unwrap()
                .hash(None)
                .unwrap(),
        }]);

        (auth_router(repo, tokens.clone(), config), tokens)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login(app: &Router, username: &str, password: &str) -> Response {
        app.clone()
            .oneshot(post_json(
                "/login",
                json!({ "username": username, "password": password }),
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_token_passes_verify_token() {
        let (app, _) = app();

        let response = login(&app, "admin", PASSWORD).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
        let token = body["token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(post_json("/verify-token", json!({ "token": token })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["username"], "admin");
        assert!(body["user"]["exp"].as_i64() > body["user"]["iat"].as_i64());
    }

    #[tokio::test]
    async fn test_failed_logins_are_indistinguishable() {
        let (app, _) = app();

        let wrong_password = login(&app, "admin", "WrongPass123!").await;
        let unknown_user = login(&app, "nobody", PASSWORD).await;

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

        let a = body_json(wrong_password).await;
        let b = body_json(unknown_user).await;
        assert_eq!(a, b);
        assert_eq!(a, json!({ "error": "Invalid credentials" }));
    }

    #[tokio::test]
    async fn test_login_missing_field_is_bad_request() {
        let (app, _) = app();

        for body in [
            json!({ "username": "admin" }),
            json!({ "password": PASSWORD }),
            json!({ "username": "", "password": PASSWORD }),
            json!({}),
        ] {
            let response = app.clone().oneshot(post_json("/login", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await["error"],
                "Username and password are required"
            );
        }
    }

    #[tokio::test]
    async fn test_login_whitespace_username_reaches_credential_check() {
        let (app, _) = app();

        let response = login(&app, "   ", PASSWORD).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid credentials" })
        );
    }

    #[tokio::test]
    async fn test_login_malformed_json_is_bad_request() {
        let (app, _) = app();

        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_verify_token_without_token() {
        let (app, _) = app();

        for body in [json!({}), json!({ "token": "" })] {
            let response = app
                .clone()
                .oneshot(post_json("/verify-token", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(
                body_json(response).await["error"],
                "Access denied. No token provided."
            );
        }
    }

    #[tokio::test]
    async fn test_verify_token_rejects_tampered_signature() {
        let (app, tokens) = app();
        let token = tokens.issue(AdminId::new(1), "admin").unwrap();

        let (signed_part, signature) = token.rsplit_once('.').unwrap();
        let replacement = if signature.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{signed_part}.{replacement}{}", &signature[1..]);

        let response = app
            .oneshot(post_json("/verify-token", json!({ "token": tampered })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid token" }));
    }
}
