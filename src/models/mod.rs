//! Request and response schemas, and mapping from table rows.

mod application;
mod listing;
mod message;
mod pet;
mod story;
mod user;

pub use application::*;
pub use listing::*;
pub use message::*;
pub use pet::*;
pub use story::*;
pub use user::*;

use crate::error::AppError;
use crate::query::Row;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a table row into a schema type.
pub fn from_row<T: DeserializeOwned>(row: Row, context: &'static str) -> Result<T, AppError> {
    serde_json::from_value(Value::Object(row)).map_err(|e| AppError::decode(context, e))
}

pub fn from_rows<T: DeserializeOwned>(rows: Vec<Row>, context: &'static str) -> Result<Vec<T>, AppError> {
    rows.into_iter().map(|r| from_row(r, context)).collect()
}

/// Ids may come back as text or as integers depending on the column type.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected id, got {}", other))),
    }
}

/// Treat an explicit null like a missing field.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
