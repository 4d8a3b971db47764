//! Directory use-cases backed by a [`UserRepository`].
//!
//! The service owns the mapping from persistence failures to domain errors:
//! a duplicate email becomes a conflict and an absent record becomes
//! not-found. Store outages and failed queries become fixed-message
//! server errors; the adapter's own text only reaches the logs.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    EMAIL_TAKEN, SERVICE_UNAVAILABLE, USER_NOT_FOUND, UserDirectory, UserPersistenceError,
    UserRepository,
};
use crate::domain::{EmailAddress, Error, NewUser, User};

/// [`UserDirectory`] implementation delegating storage to a repository.
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    repository: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

const STORE_FAILURE: &str = "user repository query failed";

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::DuplicateEmail { email } => {
            warn!(%email, "rejected duplicate email");
            Error::conflict(EMAIL_TAKEN)
        }
        UserPersistenceError::Connection { message } => {
            error!(%message, "user repository unreachable");
            Error::service_unavailable(SERVICE_UNAVAILABLE)
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user repository query failed");
            Error::internal(STORE_FAILURE)
        }
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn find_user(&self, email: &EmailAddress) -> Result<User, Error> {
        self.repository
            .find_by_email(email)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .repository
            .insert(user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %created.id(), email = %created.email(), "user created");
        Ok(created)
    }

    async fn delete_user(&self, email: &EmailAddress) -> Result<(), Error> {
        let removed = self
            .repository
            .remove(email)
            .await
            .map_err(map_persistence_error)?;
        if !removed {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        info!(%email, "user deleted");
        Ok(())
    }
}
