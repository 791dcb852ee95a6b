//! Process settings read once at startup.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Stand-in for the signed-in user until real authentication exists.
pub const DEFAULT_DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:3000",
];

#[derive(Clone, Debug)]
pub struct Settings {
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    /// Offline mode: all tables live in the in-memory store.
    pub debug: bool,
    pub cors_origins: Vec<String>,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub demo_user_id: String,
}

/// Which table backend the process talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendMode<'a> {
    Offline,
    Live { url: &'a str, key: &'a str },
}

impl Settings {
    /// Offline settings with defaults; used by tests and local demos.
    pub fn offline() -> Self {
        Settings {
            supabase_url: None,
            supabase_key: None,
            debug: true,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            demo_user_id: DEFAULT_DEMO_USER_ID.to_string(),
        }
    }
}
