//! Table client handle. Owns one backend for the life of the process; clones share it.

use crate::backend::{MemoryBackend, RestBackend, TableBackend};
use crate::config::{BackendMode, Settings};
use crate::error::{ConfigError, QueryError};
use crate::query::{CountMode, InsertRows, Query, QueryResult, Row};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn TableBackend>,
}

impl Client {
    pub fn new(backend: Arc<dyn TableBackend>) -> Self {
        Client { backend }
    }

    /// Offline settings get the seeded in-memory store; live settings need URL and key.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let backend: Arc<dyn TableBackend> = match settings.backend_mode()? {
            BackendMode::Offline => Arc::new(MemoryBackend::seeded()),
            BackendMode::Live { url, key } => Arc::new(RestBackend::new(url, key, settings.request_timeout)?),
        };
        tracing::info!(backend = backend.kind(), "table client ready");
        Ok(Client { backend })
    }

    pub fn backend_kind(&self) -> &'static str {
        self.backend.kind()
    }

    pub fn table(&self, name: &str) -> TableQuery {
        TableQuery {
            client: self.clone(),
            query: Query::new(name),
        }
    }

    pub async fn execute(&self, query: &Query) -> Result<QueryResult, QueryError> {
        self.backend.execute(query).await
    }
}

/// A query bound to the client that will run it.
#[derive(Clone)]
pub struct TableQuery {
    client: Client,
    query: Query,
}

impl TableQuery {
    fn map(self, f: impl FnOnce(Query) -> Query) -> Self {
        TableQuery {
            client: self.client,
            query: f(self.query),
        }
    }

    pub fn select(self, columns: &str) -> Self {
        self.map(|q| q.select(columns))
    }

    pub fn select_with_count(self, columns: &str, mode: CountMode) -> Self {
        self.map(|q| q.select_with_count(columns, mode))
    }

    pub fn eq(self, column: &str, value: impl Into<Value>) -> Self {
        self.map(|q| q.eq(column, value))
    }

    pub fn in_list<V: Into<Value>>(self, column: &str, values: impl IntoIterator<Item = V>) -> Self {
        self.map(|q| q.in_list(column, values))
    }

    pub fn order(self, column: &str, descending: bool) -> Self {
        self.map(|q| q.order(column, descending))
    }

    pub fn limit(self, n: usize) -> Self {
        self.map(|q| q.limit(n))
    }

    pub fn single(self) -> Self {
        self.map(Query::single)
    }

    pub fn insert(self, rows: impl Into<InsertRows>) -> Self {
        self.map(|q| q.insert(rows))
    }

    pub fn update(self, patch: Row) -> Self {
        self.map(|q| q.update(patch))
    }

    pub fn delete(self) -> Self {
        self.map(Query::delete)
    }

    pub async fn execute(self) -> Result<QueryResult, QueryError> {
        self.client.execute(&self.query).await
    }
}
