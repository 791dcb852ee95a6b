//! Table backends: the live REST service and the in-memory offline store behind one trait.

mod fixtures;
mod memory;
mod rest;

pub use fixtures::seed_tables;
pub use memory::MemoryBackend;
pub use rest::RestBackend;

use crate::error::QueryError;
use crate::query::{Query, QueryResult};
use async_trait::async_trait;

/// Executes one validated query against a table store.
#[async_trait]
pub trait TableBackend: Send + Sync {
    async fn execute(&self, query: &Query) -> Result<QueryResult, QueryError>;

    /// Short label for logs ("rest" or "memory").
    fn kind(&self) -> &'static str;
}
