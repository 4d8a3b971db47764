//! Bootstrap records loaded into the directory at startup.

use super::{User, UserValidationError};

/// Users present when the service starts: `(id, name, email)`.
pub const SEED_USERS: [(u64, &str, &str); 2] = [
    (1, "Ivan Ivanov", "i.i.ivanov@mail.com"),
    (2, "Petr Petrov", "p.p.petrov@mail.com"),
];

/// Validate and return the bootstrap users.
///
/// # Examples
/// ```
/// use user_directory::domain::seed_users;
///
/// let users = seed_users().expect("seed data is valid");
/// assert_eq!(users.len(), 2);
/// ```
pub fn seed_users() -> Result<Vec<User>, UserValidationError> {
    SEED_USERS
        .iter()
        .map(|&(id, name, email)| User::try_from_parts(id, name, email))
        .collect()
}
