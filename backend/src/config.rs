//! Service settings loaded via OrthoConfig.
//!
//! Values come from command-line flags and the process environment. No
//! prefix is applied, so the environment names are the bare field names in
//! upper case: `DB_CONNECTION_STRING`, `PORT`, `BIND_HOST` and
//! `DB_MAX_CONNECTIONS`. An ambient `HOST` variable is not read.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Configuration values for the people service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
pub struct PeopleSettings {
    /// PostgreSQL connection string. Without one the service keeps records
    /// in memory.
    pub db_connection_string: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Interface address to bind.
    pub bind_host: Option<IpAddr>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl PeopleSettings {
    /// Return the configured connection string, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.db_connection_string
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the socket address to bind, defaulting to all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        let host = self.bind_host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(host, self.port)
    }

    /// Return the pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}

impl Default for PeopleSettings {
    fn default() -> Self {
        Self {
            db_connection_string: None,
            port: DEFAULT_PORT,
            bind_host: None,
            db_max_connections: None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "DB_CONNECTION_STRING",
        "PORT",
        "BIND_HOST",
        "DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> PeopleSettings {
        PeopleSettings::load_from_iter([OsString::from("people-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert!(settings.database_url().is_none());
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "DB_CONNECTION_STRING",
                Some("postgres://people@localhost/people".to_owned()),
            ),
            ("PORT", Some("8081".to_owned())),
            ("BIND_HOST", Some("127.0.0.1".to_owned())),
            ("DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Some("postgres://people@localhost/people")
        );
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([127, 0, 0, 1], 8081))
        );
        assert_eq!(settings.db_max_connections(), 4);
    }

    #[rstest]
    fn ambient_hostname_does_not_affect_binding() {
        let _guard = lock_env([
            ("DB_CONNECTION_STRING", None::<String>),
            ("PORT", None::<String>),
            ("BIND_HOST", None::<String>),
            ("DB_MAX_CONNECTIONS", None::<String>),
            ("HOST", Some("build-agent-7.example.internal".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_connection_string_means_no_database(#[case] value: &str) {
        let settings = PeopleSettings {
            db_connection_string: Some(value.to_owned()),
            ..PeopleSettings::default()
        };
        assert!(settings.database_url().is_none());
    }
}
