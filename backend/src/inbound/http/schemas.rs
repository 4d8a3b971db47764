//! OpenAPI schema definitions and the HTTP error envelope.
//!
//! Domain types stay free of utoipa derives; the wrappers below mirror their
//! serialised shape so the OpenAPI document can describe them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: u64,
    /// Display name.
    #[schema(example = "Ivan Ivanov")]
    name: String,
    /// Unique email address.
    #[schema(example = "i.i.ivanov@mail.com")]
    email: String,
}

/// Error body returned by every failing endpoint.
///
/// `errors` carries field context for validation failures and is omitted
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    #[schema(example = "User not found")]
    pub detail: String,
    /// Offending field and machine-readable validation code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>, example = json!({"field": "email", "code": "missing_field"}))]
    pub errors: Option<Value>,
}
