//! Configuration: two environment variables, read once at startup.

use serde::Deserialize;

/// `SERVER_ADDRESS` env var key. May be empty (binds all interfaces).
pub const SERVER_ADDRESS_KEY: &str = "SERVER_ADDRESS";
/// `SERVER_PORT` env var key. Mandatory; a non-integer value is a fatal
/// startup error.
pub const SERVER_PORT_KEY: &str = "SERVER_PORT";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub server_address: String,
    pub server_port: u16,
}

/// Errors building [`Settings`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid server port: {0}")]
    InvalidPort(#[from] config::ConfigError),
}

impl Settings {
    /// Loads configuration from `SERVER_ADDRESS` / `SERVER_PORT`. An invalid
    /// or missing port is a fatal error; the caller (`main`) is responsible
    /// for logging it and exiting the process.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("server_address", "")?
            .add_source(config::Environment::default())
            .build()?;

        settings.try_deserialize().map_err(ConfigError::from)
    }

    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        let host = if self.server_address.is_empty() { "0.0.0.0" } else { &self.server_address };
        format!("{host}:{}", self.server_port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_binds_all_interfaces_when_address_is_empty() {
        let settings = Settings { server_address: String::new(), server_port: 8080 };
        assert_eq!(settings.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn socket_addr_uses_configured_address() {
        let settings = Settings { server_address: "127.0.0.1".to_string(), server_port: 9090 };
        assert_eq!(settings.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
    }
}
