//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;
use kernel::validation::{MissingField, require};
use serde::{Deserialize, Serialize};

use crate::domain::entity::submission::{ContactForm, ContactSubmission};

/// Contact form request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub query: Option<String>,
}

impl ContactRequest {
    pub fn into_form(self) -> Result<ContactForm, MissingField> {
        Ok(ContactForm {
            name: require("name", self.name)?,
            phone: require("phone", self.phone)?,
            email: require("email", self.email)?,
            query: require("query", self.query)?,
        })
    }
}

/// A stored submission as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: SubmissionId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub query: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for SubmissionResponse {
    fn from(submission: ContactSubmission) -> Self {
        let ContactForm {
            name,
            phone,
            email,
            query,
        } = submission.form;

        Self {
            id: submission.submission_id,
            name,
            phone,
            email,
            query,
            created_at: submission.created_at,
        }
    }
}

/// Submit response
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub submission: SubmissionResponse,
}
