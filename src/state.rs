//! Shared application state for all routes.

use crate::client::Client;
use crate::config::Settings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Client,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(db: Client, settings: Settings) -> Self {
        AppState {
            db,
            settings: Arc::new(settings),
        }
    }

    /// Id of the acting user (demo user until authentication exists).
    pub fn user_id(&self) -> &str {
        &self.settings.demo_user_id
    }
}
