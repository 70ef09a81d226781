//! Cross-cutting validation rules
//!
//! Every mutating endpoint takes a body whose fields are all required
//! strings. Fields arrive as `Option<String>` so that a missing key and an
//! empty value go through the same check.

use thiserror::Error;

/// A required field was absent or empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Missing required field: {0}")]
pub struct MissingField(pub &'static str);

/// Require a field to be present and non-empty. Whitespace counts as
/// content; the value is returned untouched (no trimming).
pub fn require(field: &'static str, value: Option<String>) -> Result<String, MissingField> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MissingField(field)),
    }
}
