//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so a missing field is reported as a
//! validation error rather than a deserialization failure.

use serde::{Deserialize, Serialize};

use crate::domain::entity::claims::Claims;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

// ============================================================================
// Verify Token
// ============================================================================

/// Verify token request
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: Option<String>,
}

/// Verify token response
#[derive(Debug, Clone, Serialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub user: Claims,
}
