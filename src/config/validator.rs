//! Settings validation: offline mode needs nothing; live mode needs both service URL and key.

use crate::config::{BackendMode, Settings};
use crate::error::ConfigError;
use axum::http::HeaderValue;

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        uuid::Uuid::parse_str(&self.demo_user_id).map_err(|e| ConfigError::InvalidSetting {
            name: "DEMO_USER_ID",
            message: e.to_string(),
        })?;
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidSetting {
                name: "REQUEST_TIMEOUT_SECS",
                message: "must be greater than zero".into(),
            });
        }
        self.validate_cors_origins()?;
        self.backend_mode().map(|_| ())
    }

    /// Credentials are allowed, so every origin must be explicit and a valid header value.
    fn validate_cors_origins(&self) -> Result<(), ConfigError> {
        for origin in &self.cors_origins {
            if origin == "*" {
                return Err(ConfigError::InvalidSetting {
                    name: "CORS_ORIGINS",
                    message: "wildcard origin cannot be combined with credentials".into(),
                });
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidSetting {
                name: "CORS_ORIGINS",
                message: format!("'{}' is not a valid origin", origin),
            })?;
        }
        Ok(())
    }

    pub fn backend_mode(&self) -> Result<BackendMode<'_>, ConfigError> {
        if self.debug {
            return Ok(BackendMode::Offline);
        }
        let url = self
            .supabase_url
            .as_deref()
            .ok_or(ConfigError::MissingSetting("SUPABASE_URL"))?;
        let key = self
            .supabase_key
            .as_deref()
            .ok_or(ConfigError::MissingSetting("SUPABASE_KEY"))?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidSetting {
                name: "SUPABASE_URL",
                message: format!("expected an http(s) URL, got '{}'", url),
            });
        }
        Ok(BackendMode::Live { url, key })
    }
}
