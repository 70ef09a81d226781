//! Catalog Error Types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::MissingField;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One of the seven listing fields is absent or empty
    #[error("All fields are required")]
    MissingFields,

    /// Request body is not usable JSON
    #[error("{0}")]
    InvalidBody(String),

    /// No row for the id, or the id is not a number
    #[error("Bike not found")]
    BikeNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MissingFields | CatalogError::InvalidBody(_) => ErrorKind::BadRequest,
            CatalogError::BikeNotFound => ErrorKind::NotFound,
            CatalogError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::MissingFields | CatalogError::InvalidBody(_) => {
                tracing::info!(error = %self, "Rejected bike payload");
            }
            CatalogError::BikeNotFound => {
                tracing::debug!("Bike not found");
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let kind = err.kind();
        match err {
            CatalogError::Database(e) => {
                AppError::new(kind, "Catalog database error").with_source(e)
            }
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<MissingField> for CatalogError {
    fn from(_: MissingField) -> Self {
        CatalogError::MissingFields
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::InvalidBody(rejection.body_text())
    }
}
