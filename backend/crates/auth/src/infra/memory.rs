//! In-memory repository for tests

use std::sync::{Arc, Mutex};

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::error::AuthResult;

/// Administrator store backed by a `Vec`
#[derive(Clone, Default)]
pub struct InMemoryAdminRepository {
    admins: Arc<Mutex<Vec<Admin>>>,
}

impl InMemoryAdminRepository {
    pub fn with_admins(admins: Vec<Admin>) -> Self {
        Self {
            admins: Arc::new(Mutex::new(admins)),
        }
    }
}

impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Admin>> {
        let admins = self.admins.lock().unwrap_or_else(|p| p.into_inner());
        Ok(admins
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .cloned())
    }
}
