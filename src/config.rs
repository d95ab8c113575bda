// src/config.rs
use std::fmt;
use std::net::IpAddr;

const DEFAULT_HOST: [u8; 4] = [127, 0, 0, 1];
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Without a database URL the service keeps products in memory.
    pub database_url: Option<String>,
    pub max_connections: u32,
}

/// An environment variable that is set but cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.key, self.value)
    }
}

impl std::error::Error for ConfigError {}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError { key, value }),
        None => Ok(default),
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "HOST", IpAddr::from(DEFAULT_HOST))?;
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let max_connections = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self { host, port, database_url, max_connections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_in_memory_on_localhost() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.host.to_string(), "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "5000"),
            ("DATABASE_URL", "postgres://postgres@localhost/products"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(cfg.host.to_string(), "0.0.0.0");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://postgres@localhost/products"));
        assert_eq!(cfg.max_connections, 12);
    }

    #[test]
    fn rejects_bad_port_and_ignores_blank_url() {
        let err = config(&[("PORT", "http")]).unwrap_err();
        assert_eq!(err.key, "PORT");
        assert_eq!(err.to_string(), r#"invalid PORT: "http""#);
        assert_eq!(config(&[("HOST", "localhost:80")]).unwrap_err().key, "HOST");
        assert_eq!(config(&[("DATABASE_URL", " ")]).unwrap().database_url, None);
    }
}
