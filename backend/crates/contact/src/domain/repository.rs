//! Repository Traits

use crate::domain::entity::submission::{ContactForm, ContactSubmission};
use crate::error::ContactResult;

/// Contact submission repository trait
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    /// Insert a submission; the store assigns id and timestamp
    async fn create(&self, form: &ContactForm) -> ContactResult<ContactSubmission>;

    /// All submissions, newest first
    async fn list_newest_first(&self) -> ContactResult<Vec<ContactSubmission>>;
}
