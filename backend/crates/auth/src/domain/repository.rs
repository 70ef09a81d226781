//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::admin::Admin;
use crate::error::AuthResult;

/// Administrator repository trait
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Find an administrator by user name, ignoring ASCII case
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Admin>>;
}
