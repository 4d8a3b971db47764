//! Construction of the shared HTTP adapter state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use user_directory::domain::{UserDirectoryService, seed_users};
use user_directory::inbound::http::state::HttpState;
use user_directory::outbound::memory::InMemoryUserRepository;

use super::ServerConfig;

/// Build the in-memory store, optionally seeded, and wrap it for handlers.
///
/// # Errors
/// Returns [`std::io::Error`] when the fixture users fail validation or
/// collide on email.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let repository = if config.seed_fixtures {
        let users = seed_users()
            .map_err(|e| std::io::Error::other(format!("invalid fixture user: {e}")))?;
        let repository = InMemoryUserRepository::with_users(users)
            .map_err(|e| std::io::Error::other(format!("fixture seeding failed: {e}")))?;
        info!(users = repository.len().unwrap_or_default(), "seeded user directory");
        repository
    } else {
        InMemoryUserRepository::new()
    };

    let directory = UserDirectoryService::new(Arc::new(repository));
    Ok(web::Data::new(HttpState::new(Arc::new(directory))))
}
