//! Tests for the directory user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn ivan() -> User {
    User::try_from_parts(1, "Ivan Ivanov", "i.i.ivanov@mail.com").expect("fixture user is valid")
}

#[rstest]
fn user_serialises_to_flat_record(ivan: User) {
    let value = serde_json::to_value(&ivan).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": 1, "name": "Ivan Ivanov", "email": "i.i.ivanov@mail.com" })
    );
}

#[rstest]
fn user_deserialises_from_flat_record(ivan: User) {
    let parsed: User = serde_json::from_value(json!({
        "id": 1,
        "name": "Ivan Ivanov",
        "email": "i.i.ivanov@mail.com"
    }))
    .expect("deserialise user");
    assert_eq!(parsed, ivan);
}

#[rstest]
fn user_deserialisation_enforces_invariants() {
    let result: Result<User, _> = serde_json::from_value(json!({
        "id": 0,
        "name": "Ivan Ivanov",
        "email": "i.i.ivanov@mail.com"
    }));
    assert!(result.is_err());
}

#[rstest]
#[case("", UserValidationError::EmptyName)]
#[case("   ", UserValidationError::EmptyName)]
fn user_name_rejects_blank_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserName::new(raw), Err(expected));
}

#[rstest]
fn user_name_rejects_overlong_values() {
    let raw = "a".repeat(USER_NAME_MAX + 1);
    assert_eq!(
        UserName::new(raw),
        Err(UserValidationError::NameTooLong {
            max: USER_NAME_MAX
        })
    );
}

#[rstest]
#[case("S")]
#[case("Sidor Sidorov")]
#[case("Иван Иванов")]
fn user_name_accepts_any_non_blank_text(#[case] raw: &str) {
    let name = UserName::new(raw).expect("valid name");
    assert_eq!(name.as_ref(), raw);
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("  ", UserValidationError::EmptyEmail)]
#[case("plainaddress", UserValidationError::InvalidEmail)]
#[case("@mail.com", UserValidationError::InvalidEmail)]
#[case("user@", UserValidationError::InvalidEmail)]
#[case("a@b@c", UserValidationError::InvalidEmail)]
#[case(" user@mail.com", UserValidationError::InvalidEmail)]
#[case("us er@mail.com", UserValidationError::InvalidEmail)]
fn email_rejects_malformed_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(EmailAddress::new(raw), Err(expected));
}

#[rstest]
fn email_rejects_overlong_values() {
    let raw = format!("{}@mail.com", "a".repeat(EMAIL_MAX));
    assert_eq!(
        EmailAddress::new(raw),
        Err(UserValidationError::EmailTooLong { max: EMAIL_MAX })
    );
}

#[rstest]
fn email_preserves_case() {
    let email = EmailAddress::new("Mixed.Case@Mail.com").expect("valid email");
    assert_eq!(email.as_ref(), "Mixed.Case@Mail.com");
    assert_ne!(
        email,
        EmailAddress::new("mixed.case@mail.com").expect("valid email")
    );
}

#[rstest]
fn user_id_rejects_zero() {
    assert_eq!(UserId::new(0), Err(UserValidationError::InvalidId));
}

#[rstest]
fn user_id_advances_monotonically() {
    let first = UserId::default();
    assert_eq!(first.get(), 1);
    let second = first.next().expect("room for another id");
    assert_eq!(second.get(), 2);
    assert!(second > first);
}

#[rstest]
fn user_id_sequence_ends_at_u64_max() {
    let last = UserId::new(u64::MAX).expect("valid id");
    assert!(last.next().is_none());
}

#[rstest]
fn new_user_keeps_components_when_assigned_an_id() {
    let new_user =
        NewUser::try_from_strings("New", "new@mail.com").expect("valid new user");
    let id = UserId::new(7).expect("valid id");
    let user = new_user.with_id(id);

    assert_eq!(user.id(), id);
    assert_eq!(user.name().as_ref(), "New");
    assert_eq!(user.email().as_ref(), "new@mail.com");
}
