//! Paws Adopt: pet adoption REST backend over a PostgREST-style table service.
//! In offline mode every table lives in a seeded in-memory store.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use backend::{MemoryBackend, RestBackend, TableBackend};
pub use client::{Client, TableQuery};
pub use config::{BackendMode, Settings};
pub use error::{AppError, ConfigError, QueryError};
pub use query::{CountMode, Data, Filter, Query, QueryResult, Row};
pub use routes::app;
pub use state::AppState;
