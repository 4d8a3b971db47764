//! HTTP inbound adapter exposing the directory REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/user` endpoints and extractor settings on a scope.
///
/// The server mounts this under `/api/v1`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use user_directory::inbound::http::configure_users;
///
/// let app = App::new().service(web::scope("/api/v1").configure(configure_users));
/// ```
pub fn configure_users(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::query_config())
        .service(users::get_user)
        .service(users::create_user)
        .service(users::delete_user);
}
