//! Server configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3001`).
    pub listen_addr: SocketAddr,

    /// Path to the SQLite database file.
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// `PORT` selects the listening port (default 3001); `DATABASE_PATH`
    /// selects the SQLite file (default `./db/election.db`). Falls back to
    /// defaults when a variable is not set. Calls `dotenvy::dotenv().ok()`
    /// to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting listen address cannot be parsed
    /// as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let port: u16 = parse_env("PORT", 3001);
        let listen_addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./db/election.db"));

        Ok(Self {
            listen_addr,
            database_path,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let port: u16 = parse_env("ELECTION_GATEWAY_TEST_UNSET_KEY", 3001);
        assert_eq!(port, 3001);
    }

    #[test]
    fn config_loads_with_defaults() {
        let Ok(config) = ServerConfig::from_env() else {
            panic!("config should load");
        };
        assert!(!config.database_path.as_os_str().is_empty());
    }
}
