//! In-memory backend: table name -> rows, guarded by one async mutex. Every operation runs eagerly under the lock.
//! Ordering and limit are not applied here; callers must not rely on either in offline mode.

use super::{seed_tables, TableBackend};
use crate::error::QueryError;
use crate::query::{Intent, Query, QueryResult, Row};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

pub struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<Row>>>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MemoryBackend {
    /// Store preloaded with the sample fixtures.
    pub fn seeded() -> Self {
        Self::with_tables(seed_tables())
    }

    pub fn empty() -> Self {
        Self::with_tables(HashMap::new())
    }

    pub fn with_tables(tables: HashMap<String, Vec<Row>>) -> Self {
        MemoryBackend {
            tables: Mutex::new(tables),
        }
    }

    /// Copy of a table's current rows (empty for unknown tables).
    pub async fn snapshot(&self, table: &str) -> Vec<Row> {
        self.tables.lock().await.get(table).cloned().unwrap_or_default()
    }
}

fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Assign `len + 1` as id, stepping past values already taken so no two rows share an id.
fn assign_ids(existing: &[Row], incoming: Vec<Row>) -> Vec<Row> {
    let mut taken: HashSet<String> = existing
        .iter()
        .filter_map(|r| r.get("id"))
        .map(id_text)
        .collect();
    for r in &incoming {
        if let Some(id) = r.get("id") {
            taken.insert(id_text(id));
        }
    }
    let mut next = existing.len() + 1;
    incoming
        .into_iter()
        .map(|mut row| {
            if !row.contains_key("id") {
                while taken.contains(&next.to_string()) {
                    next += 1;
                }
                let id = next.to_string();
                taken.insert(id.clone());
                row.insert("id".into(), Value::String(id));
                next += 1;
            }
            row
        })
        .collect()
}

#[async_trait]
impl TableBackend for MemoryBackend {
    async fn execute(&self, query: &Query) -> Result<QueryResult, QueryError> {
        query.validate()?;
        let mut tables = self.tables.lock().await;
        match query.intent() {
            Intent::Select => {
                let rows: Vec<Row> = tables
                    .get(query.table())
                    .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
                    .unwrap_or_default();
                let count = query.count_mode().map(|_| rows.len() as u64);
                Ok(QueryResult::for_query(query, rows, count))
            }
            Intent::Insert(rows) => {
                let table = tables.entry(query.table().to_string()).or_default();
                let inserted = assign_ids(table, rows.clone());
                table.extend(inserted.iter().cloned());
                let count = Some(inserted.len() as u64);
                Ok(QueryResult::for_query(query, inserted, count))
            }
            Intent::Update(patch) => {
                let mut updated = Vec::new();
                if let Some(table) = tables.get_mut(query.table()) {
                    for row in table.iter_mut().filter(|r| query.matches(r)) {
                        for (k, v) in patch {
                            row.insert(k.clone(), v.clone());
                        }
                        updated.push(row.clone());
                    }
                }
                let count = Some(updated.len() as u64);
                Ok(QueryResult::for_query(query, updated, count))
            }
            Intent::Delete => {
                if let Some(table) = tables.get_mut(query.table()) {
                    table.retain(|r| !query.matches(r));
                }
                Ok(QueryResult::for_query(query, Vec::new(), Some(0)))
            }
        }
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> Row {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn ids_start_after_table_length() {
        let existing = vec![row(json!({"id": "1"})), row(json!({"id": "2"}))];
        let out = assign_ids(&existing, vec![row(json!({"name": "a"}))]);
        assert_eq!(out[0]["id"], json!("3"));
    }

    #[test]
    fn ids_skip_values_already_taken() {
        // After a delete the length shrinks below the highest id.
        let existing = vec![row(json!({"id": "2"})), row(json!({"id": "3"}))];
        let out = assign_ids(&existing, vec![row(json!({})), row(json!({}))]);
        assert_eq!(out[0]["id"], json!("4"));
        assert_eq!(out[1]["id"], json!("5"));
    }

    #[test]
    fn explicit_ids_are_kept_and_reserved() {
        let out = assign_ids(&[], vec![row(json!({})), row(json!({"id": "1"}))]);
        assert_eq!(out[0]["id"], json!("2"));
        assert_eq!(out[1]["id"], json!("1"));
    }

    #[tokio::test]
    async fn unknown_table_reads_empty_and_insert_creates_it() {
        let mem = MemoryBackend::empty();
        let res = mem.execute(&Query::new("notes")).await.unwrap();
        assert!(res.is_empty());
        mem.execute(&Query::new("notes").insert(row(json!({"text": "hi"}))))
            .await
            .unwrap();
        assert_eq!(mem.snapshot("notes").await.len(), 1);
    }

    #[tokio::test]
    async fn misuse_never_reaches_the_store() {
        let mem = MemoryBackend::empty();
        let q = Query::new("notes").insert(row(json!({"text": "hi"}))).delete();
        assert!(matches!(mem.execute(&q).await, Err(QueryError::Usage(_))));
        assert!(mem.snapshot("notes").await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let mem = std::sync::Arc::new(MemoryBackend::empty());
        let mut handles = Vec::new();
        for i in 0..16 {
            let mem = mem.clone();
            handles.push(tokio::spawn(async move {
                mem.execute(&Query::new("favorites").insert(row(json!({"pet_id": i}))))
                    .await
                    .unwrap()
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        let ids: HashSet<String> = mem
            .snapshot("favorites")
            .await
            .iter()
            .map(|r| id_text(&r["id"]))
            .collect();
        assert_eq!(ids.len(), 16);
    }
}
