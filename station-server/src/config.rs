//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variable for the bind address.
pub const HOST_VAR: &str = "STATION_HOST";

/// Environment variable for the listen port.
pub const PORT_VAR: &str = "STATION_PORT";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Create a configuration for the given address.
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(value) => value.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?,
            None => defaults.host,
        };

        let port = match lookup(PORT_VAR) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    /// The socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn unset_vars_use_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn custom_config() {
        let config =
            ServerConfig::from_lookup(lookup(&[(HOST_VAR, "0.0.0.0"), (PORT_VAR, " 8080 ")]))
                .unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: PORT_VAR,
                value: "eighty".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "STATION_PORT is not a valid port: \"eighty\""
        );

        assert!(ServerConfig::from_lookup(lookup(&[(PORT_VAR, "70000")])).is_err());
    }

    #[test]
    fn invalid_host() {
        let err = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
