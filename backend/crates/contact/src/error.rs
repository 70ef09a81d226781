//! Contact Error Types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::MissingField;
use thiserror::Error;

/// Contact-specific result type alias
pub type ContactResult<T> = Result<T, ContactError>;

/// Contact-specific error variants
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,

    #[error("{0}")]
    InvalidBody(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::MissingFields | ContactError::InvalidBody(_) => ErrorKind::BadRequest,
            ContactError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            ContactError::Database(e) => {
                tracing::error!(error = %e, "Contact database error");
            }
            _ => {
                tracing::info!(error = %self, "Rejected contact submission");
            }
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        let kind = err.kind();
        match err {
            ContactError::Database(e) => {
                AppError::new(kind, "Contact database error").with_source(e)
            }
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<MissingField> for ContactError {
    fn from(_: MissingField) -> Self {
        ContactError::MissingFields
    }
}

impl From<JsonRejection> for ContactError {
    fn from(rejection: JsonRejection) -> Self {
        ContactError::InvalidBody(rejection.body_text())
    }
}
