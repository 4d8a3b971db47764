//! Mutex-guarded in-memory implementation of [`UserRepository`].
//!
//! One lock covers both the email index and the identifier sequence, so the
//! uniqueness check and the insert happen as a single step. The guard is
//! never held across an `.await`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, User, UserId};

#[derive(Debug)]
struct Directory {
    by_email: HashMap<EmailAddress, User>,
    /// `None` once every identifier has been issued.
    next_id: Option<UserId>,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            by_email: HashMap::new(),
            next_id: Some(UserId::default()),
        }
    }
}

impl Directory {
    fn admit(&mut self, user: User) -> Result<(), UserPersistenceError> {
        if self.by_email.contains_key(user.email()) {
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        if self.next_id.is_some_and(|next| user.id() >= next) {
            self.next_id = user.id().next();
        }
        self.by_email.insert(user.email().clone(), user);
        Ok(())
    }
}

/// Directory store holding every user record in process memory.
///
/// # Examples
/// ```
/// use user_directory::outbound::memory::InMemoryUserRepository;
///
/// let repository = InMemoryUserRepository::new();
/// assert_eq!(repository.len().expect("lock is healthy"), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<Directory>,
}

impl InMemoryUserRepository {
    /// Create an empty directory whose first identifier is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with `users`.
    ///
    /// Identifiers issued afterwards continue past the largest seeded id.
    /// Seeding two users with the same email fails with
    /// [`UserPersistenceError::DuplicateEmail`].
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Result<Self, UserPersistenceError> {
        let mut directory = Directory::default();
        for user in users {
            directory.admit(user)?;
        }
        Ok(Self {
            state: Mutex::new(directory),
        })
    }

    /// Number of stored users.
    pub fn len(&self) -> Result<usize, UserPersistenceError> {
        Ok(self.lock()?.by_email.len())
    }

    /// Whether the directory holds no users.
    pub fn is_empty(&self) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.by_email.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Directory>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::query("user directory lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.by_email.get(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut directory = self.lock()?;
        let id = directory
            .next_id
            .ok_or_else(|| UserPersistenceError::query("identifier space exhausted"))?;
        let created = user.with_id(id);
        directory.admit(created.clone())?;
        Ok(created)
    }

    async fn remove(&self, email: &EmailAddress) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.by_email.remove(email).is_some())
    }
}
