//! Live backend: one HTTP request per query against `<base>/rest/v1/<table>`.

use super::TableBackend;
use crate::error::{ConfigError, QueryError};
use crate::query::{parse_content_range, render, Intent, Query, QueryResult, Row};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

const CONTENT_RANGE: &str = "content-range";
const PREFER: &str = "prefer";

pub struct RestBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RestBackend {
    /// `url` is the service root (e.g. `https://xyz.supabase.co`); `key` authenticates every call.
    pub fn new(url: &str, key: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(key).map_err(|_| ConfigError::InvalidSetting {
            name: "SUPABASE_KEY",
            message: "not a valid header value".into(),
        })?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", key)).map_err(|_| ConfigError::InvalidSetting {
            name: "SUPABASE_KEY",
            message: "not a valid header value".into(),
        })?;
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(RestBackend {
            base_url: format!("{}/rest/v1", url.trim_end_matches('/')),
            http,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }
}

fn transport(e: reqwest::Error) -> QueryError {
    QueryError::Transport(e.to_string())
}

fn decode_rows(body: &[u8]) -> Result<Vec<Row>, QueryError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_slice(body).map_err(|e| QueryError::Decode(e.to_string()))?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(QueryError::Decode(format!("expected row object, got {}", other))),
            })
            .collect(),
        Value::Object(map) => Ok(vec![map]),
        other => Err(QueryError::Decode(format!("expected array of rows, got {}", other))),
    }
}

fn accepted(intent: &Intent, status: StatusCode) -> bool {
    match intent {
        Intent::Select => status == StatusCode::OK || status == StatusCode::PARTIAL_CONTENT,
        Intent::Insert(_) => status == StatusCode::OK || status == StatusCode::CREATED,
        Intent::Update(_) => status == StatusCode::OK || status == StatusCode::NO_CONTENT,
        Intent::Delete => status.is_success(),
    }
}

#[async_trait]
impl TableBackend for RestBackend {
    async fn execute(&self, query: &Query) -> Result<QueryResult, QueryError> {
        query.validate()?;
        let req = render(query);
        tracing::debug!(method = %req.method, table = %query.table(), params = ?req.params, "rest query");

        let mut builder = self
            .http
            .request(req.method.clone(), self.table_url(query.table()))
            .query(&req.params)
            .header(PREFER, req.prefer.as_str());
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(transport)?;
        let status = resp.status();
        let range = resp
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes().await.map_err(transport)?;

        if !accepted(query.intent(), status) {
            let text = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(status = status.as_u16(), table = %query.table(), body = %text, "table service rejected request");
            return Err(QueryError::Backend {
                status: status.as_u16(),
                body: text,
            });
        }

        if req.method == Method::DELETE {
            return Ok(QueryResult::for_query(query, Vec::new(), Some(0)));
        }
        let rows = decode_rows(&body)?;
        let count = match query.intent() {
            Intent::Select => match query.count_mode() {
                Some(_) => range.as_deref().and_then(parse_content_range),
                None => None,
            },
            _ => Some(rows.len() as u64),
        };
        Ok(QueryResult::for_query(query, rows, count))
    }

    fn kind(&self) -> &'static str {
        "rest"
    }
}
