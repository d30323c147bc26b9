use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://leaderboard.db";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(String),

    #[error("PORT is not the correct format: {0}")]
    InvalidPort(String),

    #[error("ROUTE_PREFIX must start with '/': {0}")]
    InvalidRoutePrefix(String),
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
    /// Mount point for every endpoint, e.g. `/api`. Empty means root.
    pub route_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: Ipv4Addr::UNSPECIFIED,
            port: DEFAULT_PORT,
            route_prefix: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank keys
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let database_url = get("DATABASE_URL").unwrap_or(defaults.database_url);

        let host = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let route_prefix = match get("ROUTE_PREFIX") {
            Some(raw) => normalize_prefix(&raw)?,
            None => defaults.route_prefix,
        };

        Ok(Self {
            database_url,
            host,
            port,
            route_prefix,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidRoutePrefix(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().port(), 3000);
        assert_eq!(config.route_prefix, "");
    }

    #[test]
    fn reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ROUTE_PREFIX", "/api/"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.route_prefix, "/api");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "  "), ("ROUTE_PREFIX", "/")]))
            .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.route_prefix, "");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }

    #[test]
    fn rejects_bad_host() {
        let err = Config::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHost("localhost".to_string()));
    }

    #[test]
    fn rejects_prefix_without_leading_slash() {
        let err = Config::from_lookup(lookup_from(&[("ROUTE_PREFIX", "api")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRoutePrefix("api".to_string()));
    }
}
