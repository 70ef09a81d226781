//! Token Claims
//!
//! Payload carried by a bearer token and echoed back by `/api/verify-token`.

use kernel::id::AdminId;
use serde::{Deserialize, Serialize};

/// Decoded token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject administrator ID
    pub id: AdminId,
    /// Subject administrator user name
    pub username: String,
    /// Issued-at (seconds since the Unix epoch)
    pub iat: i64,
    /// Expiry (seconds since the Unix epoch)
    pub exp: i64,
}
