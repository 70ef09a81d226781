//! HTTP Handlers

use auth::AdminPrincipal;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;
use crate::presentation::dto::{ContactRequest, SubmissionResponse, SubmitResponse};

/// Shared state for contact handlers
#[derive(Clone)]
pub struct ContactAppState<R>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/contact
pub async fn submit<R>(
    State(state): State<ContactAppState<R>>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> ContactResult<(StatusCode, Json<SubmitResponse>)>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let form = req.into_form()?;

    let submission = state.repo.create(&form).await?;

    tracing::info!(submission_id = %submission.submission_id, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Contact form submitted successfully",
            submission: submission.into(),
        }),
    ))
}

/// GET /api/contact-submissions
pub async fn list_submissions<R>(
    State(state): State<ContactAppState<R>>,
    Extension(admin): Extension<AdminPrincipal>,
) -> ContactResult<Json<Vec<SubmissionResponse>>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let submissions = state.repo.list_newest_first().await?;

    tracing::debug!(
        admin_id = %admin.admin_id,
        count = submissions.len(),
        "Listed contact submissions"
    );

    Ok(Json(
        submissions.into_iter().map(SubmissionResponse::from).collect(),
    ))
}
