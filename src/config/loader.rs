//! Load settings from the process environment (after `.env`), or from any name -> value lookup.

use crate::config::settings::*;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

impl Settings {
    /// Read `.env` if present, then the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from a lookup function. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let debug = get("DEBUG").map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false);

        let cors_origins = match get("CORS_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        let bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidSetting {
                name: "BIND_ADDR",
                message: e.to_string(),
            })?;

        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().map_err(|e| ConfigError::InvalidSetting {
                name: "REQUEST_TIMEOUT_SECS",
                message: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let settings = Settings {
            supabase_url: get("SUPABASE_URL"),
            supabase_key: get("SUPABASE_KEY"),
            debug,
            cors_origins,
            bind_addr,
            request_timeout: Duration::from_secs(timeout_secs),
            demo_user_id: get("DEMO_USER_ID").unwrap_or_else(|| DEFAULT_DEMO_USER_ID.into()),
        };
        settings.validate()?;
        Ok(settings)
    }
}
