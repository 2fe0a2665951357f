use crate::services::order_service::DEFAULT_LEAD_TIME_DAYS;
use crate::services::product_cache::DEFAULT_TTL_SECS;
use chrono::TimeDelta;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mysql,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(StoreBackend::Mysql),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_max_connections: usize,
    /// Zero disables the product cache.
    pub product_cache_ttl: TimeDelta,
    pub order_lead_time: TimeDelta,
    pub jwt_secret: Option<String>,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub seed_demo_data: bool,
}

impl Config {
    /// Reads configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let config = Config::from_lookup(|key| std::env::var(key).ok())?;

        tracing::info!(backend = ?config.store_backend, listen = %config.listen_addr, "Config loaded");

        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen_addr = parse_or(&get, "LISTEN_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?;
        let store_backend = parse_or(&get, "STORE_BACKEND", StoreBackend::Mysql)?;
        let database_url = get("DATABASE_URL");
        if store_backend == StoreBackend::Mysql && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = parse_or(&get, "DATABASE_MAX_CONNECTIONS", 10usize)?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let cache_ttl_secs = parse_or(&get, "PRODUCT_CACHE_TTL_SECS", DEFAULT_TTL_SECS as u32)?;
        let lead_time_days = parse_or(&get, "ORDER_LEAD_TIME_DAYS", DEFAULT_LEAD_TIME_DAYS as u32)?;

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            listen_addr,
            store_backend,
            database_url,
            database_max_connections,
            product_cache_ttl: TimeDelta::seconds(i64::from(cache_ttl_secs)),
            order_lead_time: TimeDelta::days(i64::from(lead_time_days)),
            jwt_secret: get("JWT_SECRET"),
            cors_allowed_origins,
            seed_demo_data: parse_or(&get, "SEED_DEMO_DATA", false)?,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
