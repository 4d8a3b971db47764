//! Driven port for the directory store and its errors.

use async_trait::async_trait;

use crate::domain::{EmailAddress, NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Another record already owns the email.
        DuplicateEmail { email: String } => "a user with email {email} already exists",
        /// The backing store could not be reached.
        Connection { message: String } => "user repository connection failed: {message}",
        /// A read or mutation failed while executing.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for user records keyed by email.
///
/// Implementations own the records and the identifier sequence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user registered under `email`.
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<User>, UserPersistenceError>;

    /// Assign a fresh identifier and store the user.
    ///
    /// The uniqueness check and the insert are one atomic step: a taken email
    /// yields [`UserPersistenceError::DuplicateEmail`] and leaves the existing
    /// record untouched.
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Remove the user registered under `email`.
    ///
    /// Returns `false` when no such user exists.
    async fn remove(&self, email: &EmailAddress) -> Result<bool, UserPersistenceError>;
}
