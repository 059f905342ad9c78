//! Runtime settings read from environment variables (a `.env` file is loaded first by the binary).

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/products";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_PAGE_SIZE: u32 = 2;

/// Which [`ProductStore`](crate::store::ProductStore) backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub store: StoreKind,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Maximum rows returned by the product listing.
    pub page_size: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store: StoreKind::Postgres,
            database_url: DEFAULT_DATABASE_URL.into(),
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            page_size: DEFAULT_PAGE_SIZE,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            body_limit: 1024 * 1024,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let page_size = parse_or(&lookup, "PRODUCTS_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "PRODUCTS_PAGE_SIZE",
                value: "0".into(),
            });
        }
        Ok(Self {
            store: parse_or(&lookup, "PRODUCT_STORE", defaults.store)?,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            page_size,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )?),
            body_limit: parse_or(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
