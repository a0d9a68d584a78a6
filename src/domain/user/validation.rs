//! Shape validation for the user listing
//!
//! The parse step is an explicit `Result` consumed by the view controller to
//! choose its success or error branch; no record-level recovery is attempted.

use serde_json::Value;

use super::entity::User;
use crate::domain::DomainError;

/// Parse and validate a response body as the full user listing.
///
/// Fail-fast: a non-array body, or any record missing a required field or
/// carrying a wrong type, rejects the entire listing. Unknown extra fields
/// from the upstream are ignored. There are no partial lists.
pub fn parse_users(body: Value) -> Result<Vec<User>, DomainError> {
    serde_json::from_value(body)
        .map_err(|e| DomainError::validation(format!("Invalid user listing: {}", e)))
}
