//! Runtime configuration loaded from the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BASE_PATH: &str = "/api/go";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors raised while reading configuration at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub base_path: String,
    pub max_connections: u32,
    pub log_json: bool,
}

impl Config {
    /// Loads configuration from the environment, after pulling in a local
    /// `.env` file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = match lookup("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let base_path = match lookup("API_BASE_PATH") {
            Some(value) => normalize_base_path(&value).ok_or(ConfigError::Invalid {
                key: "API_BASE_PATH",
                value,
            })?,
            None => DEFAULT_BASE_PATH.to_string(),
        };

        let log_json = lookup("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            host,
            port,
            base_path,
            max_connections,
            log_json,
        })
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

/// Trims trailing slashes; an empty result means routes mount at the root.
fn normalize_base_path(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Some(String::new());
    }
    trimmed.starts_with('/').then(|| trimmed.to_string())
}
