//! Error conversions
//!
//! The single place where an [`AppError`] becomes an HTTP response. Domain
//! crates map their own errors into [`AppError`] and decide the kind there.

#[cfg(feature = "axum")]
use super::app_error::AppError;

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({ "error": self.public_message() });

        (status, Json(body)).into_response()
    }
}
