//! User directory service library.
//!
//! The crate follows a hexagonal layout: `domain` holds the user record,
//! its validation and the directory ports; `inbound::http` adapts the ports
//! to Actix handlers; `outbound::memory` provides the in-process store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
