//! Input validation helpers shared by the HTTP handlers.
//!
//! Every failure becomes an [`Error::invalid_request`] carrying the offending
//! field and a stable code under `details`.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{EmailAddress, Error, UserValidationError};

/// Validation codes reported alongside the field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    MalformedBody,
    MalformedQuery,
    EmptyName,
    NameTooLong,
    EmptyEmail,
    EmailTooLong,
    InvalidEmail,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::MalformedBody => "malformed_body",
            Self::MalformedQuery => "malformed_query",
            Self::EmptyName => "empty_name",
            Self::NameTooLong => "name_too_long",
            Self::EmptyEmail => "empty_email",
            Self::EmailTooLong => "email_too_long",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

/// Name of a request field as clients spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME_FIELD: FieldName = FieldName::new("name");
pub(crate) const EMAIL_FIELD: FieldName = FieldName::new("email");

fn field_error(field: FieldName, code: ValidationCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field_name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {field_name}"),
    )
}

/// Map a domain validation failure onto the field that caused it.
pub(crate) fn user_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match err {
        UserValidationError::EmptyName => (NAME_FIELD, ValidationCode::EmptyName),
        UserValidationError::NameTooLong { .. } => (NAME_FIELD, ValidationCode::NameTooLong),
        UserValidationError::EmptyEmail => (EMAIL_FIELD, ValidationCode::EmptyEmail),
        UserValidationError::EmailTooLong { .. } => (EMAIL_FIELD, ValidationCode::EmailTooLong),
        UserValidationError::InvalidEmail => (EMAIL_FIELD, ValidationCode::InvalidEmail),
        UserValidationError::InvalidId => {
            return Error::internal(format!("unexpected id validation failure: {err}"));
        }
    };
    field_error(field, code, err.to_string())
}

/// Validate an optional raw email taken from the query string.
pub(crate) fn parse_email(raw: Option<String>) -> Result<EmailAddress, Error> {
    let raw = raw.ok_or_else(|| missing_field_error(EMAIL_FIELD))?;
    EmailAddress::new(raw).map_err(user_validation_error)
}

/// JSON extractor settings routing body errors into the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "rejected request body");
        Error::invalid_request(format!("request body is invalid: {err}"))
            .with_details(json!({ "code": ValidationCode::MalformedBody.as_str() }))
            .into()
    })
}

/// Query extractor settings routing query-string errors into the error envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "rejected query string");
        Error::invalid_request(format!("query string is invalid: {err}"))
            .with_details(json!({ "code": ValidationCode::MalformedQuery.as_str() }))
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a str> {
        error
            .details()
            .and_then(|details| details.get(key))
            .and_then(Value::as_str)
    }

    #[rstest]
    #[case(UserValidationError::EmptyName, "name", "empty_name")]
    #[case(UserValidationError::NameTooLong { max: 128 }, "name", "name_too_long")]
    #[case(UserValidationError::EmptyEmail, "email", "empty_email")]
    #[case(UserValidationError::EmailTooLong { max: 254 }, "email", "email_too_long")]
    #[case(UserValidationError::InvalidEmail, "email", "invalid_email")]
    fn validation_errors_name_their_field(
        #[case] err: UserValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let message = err.to_string();
        let error = user_validation_error(err);
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), message);
        assert_eq!(detail(&error, "field"), Some(field));
        assert_eq!(detail(&error, "code"), Some(code));
    }

    #[rstest]
    fn missing_email_is_reported_as_missing_field() {
        let error = parse_email(None).expect_err("missing email");
        assert_eq!(error.message(), "missing required field: email");
        assert_eq!(detail(&error, "code"), Some("missing_field"));
    }

    #[rstest]
    fn present_email_is_validated() {
        let email = parse_email(Some("new@mail.com".to_owned())).expect("valid email");
        assert_eq!(email.as_ref(), "new@mail.com");

        let error = parse_email(Some(String::new())).expect_err("empty email");
        assert_eq!(detail(&error, "code"), Some("empty_email"));
    }
}
