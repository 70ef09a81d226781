//! In-memory repository for tests

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;

use crate::domain::entity::submission::{ContactForm, ContactSubmission};
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: Vec<ContactSubmission>,
}

/// Contact store backed by a `Vec`
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    table: Arc<Mutex<Table>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with an explicit timestamp, for seeding ordering scenarios
    pub fn insert_at(&self, form: ContactForm, created_at: DateTime<Utc>) -> ContactSubmission {
        let mut table = self.table();
        table.last_id += 1;
        let submission = ContactSubmission {
            submission_id: SubmissionId::new(table.last_id),
            form,
            created_at,
        };
        table.rows.push(submission.clone());
        submission
    }

    pub fn len(&self) -> usize {
        self.table().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, form: &ContactForm) -> ContactResult<ContactSubmission> {
        Ok(self.insert_at(form.clone(), Utc::now()))
    }

    async fn list_newest_first(&self) -> ContactResult<Vec<ContactSubmission>> {
        let mut rows = self.table().rows.clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.submission_id.get().cmp(&a.submission_id.get()))
        });
        Ok(rows)
    }
}
