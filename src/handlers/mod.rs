//! HTTP handlers per endpoint family. Each builds table queries through the client in `AppState`.

pub mod applications;
pub mod favorites;
pub mod listings;
pub mod messages;
pub mod pets;
pub mod stories;
pub mod users;

use serde_json::Value;

/// Column value as text (ids may be stored as numbers).
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
