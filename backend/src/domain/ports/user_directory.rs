//! Driving port for the directory use-cases.
//!
//! HTTP handlers call this port and never touch the repository directly, so
//! handler tests can substitute any implementation.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, NewUser, User};

/// Message returned when a lookup or delete targets an absent email.
pub const USER_NOT_FOUND: &str = "User not found";
/// Message returned when a create targets an email already in use.
pub const EMAIL_TAKEN: &str = "User with this email already exists";
/// Message returned when the backing store cannot be reached.
pub const SERVICE_UNAVAILABLE: &str = "Service unavailable";

/// Directory use-cases exposed to inbound adapters.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return the user registered under `email`, or a not-found error.
    async fn find_user(&self, email: &EmailAddress) -> Result<User, Error>;

    /// Register a new user, or fail with a conflict if the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Permanently remove the user registered under `email`.
    async fn delete_user(&self, email: &EmailAddress) -> Result<(), Error>;
}
