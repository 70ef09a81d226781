//! Contact Submission Entity

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;

/// Caller-supplied inquiry fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub query: String,
}

/// Stored inquiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub submission_id: SubmissionId,
    pub form: ContactForm,
    /// Assigned by the store at insert time
    pub created_at: DateTime<Utc>,
}
