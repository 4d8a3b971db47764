//! HTTP server configuration loaded via OrthoConfig.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings read from CLI flags, `USER_DIRECTORY_*` environment variables
/// and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct ServerSettings {
    /// Socket address the listener binds to.
    pub bind_addr: Option<String>,
    /// Load the two fixture users on startup.
    #[ortho_config(default = true)]
    pub seed_fixtures: bool,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_fixtures: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_fixtures: true,
        }
    }

    /// Choose whether the store starts with the fixture users.
    #[must_use]
    pub fn with_seed_fixtures(mut self, seed_fixtures: bool) -> Self {
        self.seed_fixtures = seed_fixtures;
        self
    }

    /// Resolve loaded settings into a server configuration.
    pub fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        Ok(Self::new(settings.bind_addr()?).with_seed_fixtures(settings.seed_fixtures))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("user-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USER_DIRECTORY_BIND_ADDR", None::<String>),
            ("USER_DIRECTORY_SEED_FIXTURES", None::<String>),
        ]);

        let config = ServerConfig::from_settings(&load_from_empty_args()).expect("valid config");
        assert_eq!(
            config,
            ServerConfig::new("0.0.0.0:8080".parse().expect("socket address"))
        );
        assert!(config.seed_fixtures);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_DIRECTORY_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("USER_DIRECTORY_SEED_FIXTURES", Some("false".to_owned())),
        ]);

        let config = ServerConfig::from_settings(&load_from_empty_args()).expect("valid config");
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(!config.seed_fixtures);
    }

    #[rstest]
    fn invalid_bind_address_is_rejected() {
        let settings = ServerSettings {
            bind_addr: Some("not-an-address".to_owned()),
            seed_fixtures: true,
        };
        let err = settings.bind_addr().expect_err("invalid address");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
