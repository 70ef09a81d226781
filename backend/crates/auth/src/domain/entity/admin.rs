//! Administrator Entity
//!
//! Administrators are provisioned out-of-band (see the `hash_password`
//! binary) and are read-only from this service's point of view.

use kernel::id::AdminId;
use platform::password::HashedPassword;

/// Administrator credential record
#[derive(Debug, Clone)]
pub struct Admin {
    /// Store-assigned identifier
    pub admin_id: AdminId,
    /// Login name as stored (lookups ignore ASCII case)
    pub username: String,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
}
