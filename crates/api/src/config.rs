use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Runtime configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub skip_migrations: bool,
    pub introspection_enabled: bool,
    pub depth_limit: usize,
    pub complexity_limit: usize,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults for everything except the connection string.
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self::with_overrides(url.into(), |_| None)
    }

    /// Build the config from an arbitrary key lookup. Unparseable values fall
    /// back to their defaults; only `DATABASE_URL` is mandatory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self::with_overrides(database_url, lookup))
    }

    fn with_overrides<F>(database_url: String, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key)
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };

        Self {
            database_url,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            port: lookup("PORT").and_then(|s| s.parse().ok()).unwrap_or(8080),
            skip_migrations: flag("SKIP_MIGRATIONS"),
            introspection_enabled: flag("GQL_INTROSPECTION"),
            depth_limit: lookup("GQL_DEPTH_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(15),
            complexity_limit: lookup("GQL_COMPLEXITY_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(200),
            request_timeout: Duration::from_secs(
                lookup("REQUEST_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }
}
