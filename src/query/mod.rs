//! Table query value: filters, ordering, pagination and the terminal operation for one table call.
//! Every chained method consumes the query and returns the next value; nothing is executed until a backend runs it.

mod render;
pub use render::*;

use crate::error::QueryError;
use serde::Serialize;
use serde_json::Value;

/// One row as returned by the table service: column name to JSON value, in column order.
pub type Row = serde_json::Map<String, Value>;

/// Serialize a typed struct into a row for insert/update.
pub fn to_row<T: Serialize>(value: &T) -> Result<Row, QueryError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(QueryError::Usage(format!("row must be a JSON object, got {}", other))),
        Err(e) => Err(QueryError::Usage(format!("row serialization: {}", e))),
    }
}

/// Conjunctive predicate on one column.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Eq { column: String, value: Value },
    In { column: String, values: Vec<Value> },
}

impl Filter {
    /// Exact value comparison; a missing column never matches.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Filter::Eq { column, value } => row.get(column) == Some(value),
            Filter::In { column, values } => row
                .get(column)
                .map(|v| values.iter().any(|candidate| candidate == v))
                .unwrap_or(false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ordering {
    pub column: String,
    pub descending: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountMode {
    Exact,
}

impl CountMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CountMode::Exact => "exact",
        }
    }
}

/// Terminal operation of a query.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Select,
    Insert(Vec<Row>),
    Update(Row),
    Delete,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Select => "select",
            Intent::Insert(_) => "insert",
            Intent::Update(_) => "update",
            Intent::Delete => "delete",
        }
    }
}

/// Rows accepted by `insert`: one row or many. A single row is wrapped in a one-element batch.
#[derive(Clone, Debug, PartialEq)]
pub struct InsertRows(pub Vec<Row>);

impl From<Row> for InsertRows {
    fn from(row: Row) -> Self {
        InsertRows(vec![row])
    }
}

impl From<Vec<Row>> for InsertRows {
    fn from(rows: Vec<Row>) -> Self {
        InsertRows(rows)
    }
}

#[derive(Clone, Debug)]
pub struct Query {
    table: String,
    columns: String,
    count: Option<CountMode>,
    filters: Vec<Filter>,
    order: Option<Ordering>,
    limit: Option<usize>,
    single: bool,
    intent: Intent,
    /// True once select/insert/update/delete was called explicitly.
    marked: bool,
    misuse: Option<String>,
}

impl Query {
    pub fn new(table: impl Into<String>) -> Self {
        Query {
            table: table.into(),
            columns: "*".into(),
            count: None,
            filters: Vec::new(),
            order: None,
            limit: None,
            single: false,
            intent: Intent::Select,
            marked: false,
            misuse: None,
        }
    }

    pub fn select(self, columns: &str) -> Self {
        self.select_inner(columns, None)
    }

    /// Select that also asks the backend for the total number of matching rows.
    pub fn select_with_count(self, columns: &str, mode: CountMode) -> Self {
        self.select_inner(columns, Some(mode))
    }

    fn select_inner(mut self, columns: &str, count: Option<CountMode>) -> Self {
        if self.marked && self.intent != Intent::Select {
            self.record_misuse("select");
            return self;
        }
        self.marked = true;
        self.columns = if columns.trim().is_empty() { "*".into() } else { columns.to_string() };
        self.count = count;
        self
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn in_list<V: Into<Value>>(mut self, column: &str, values: impl IntoIterator<Item = V>) -> Self {
        self.filters.push(Filter::In {
            column: column.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Only the last ordering is kept.
    pub fn order(mut self, column: &str, descending: bool) -> Self {
        self.order = Some(Ordering {
            column: column.to_string(),
            descending,
        });
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn insert(self, rows: impl Into<InsertRows>) -> Self {
        self.mark(Intent::Insert(rows.into().0))
    }

    pub fn update(self, patch: Row) -> Self {
        self.mark(Intent::Update(patch))
    }

    pub fn delete(self) -> Self {
        self.mark(Intent::Delete)
    }

    fn mark(mut self, intent: Intent) -> Self {
        if self.marked {
            self.record_misuse(intent.name());
            return self;
        }
        self.marked = true;
        self.intent = intent;
        self
    }

    fn record_misuse(&mut self, attempted: &str) {
        if self.misuse.is_none() {
            self.misuse = Some(format!(
                "{} called on a {} query for table '{}'",
                attempted,
                self.intent.name(),
                self.table
            ));
        }
    }

    /// Rejects queries that named more than one terminal operation.
    pub fn validate(&self) -> Result<(), QueryError> {
        match &self.misuse {
            Some(m) => Err(QueryError::Usage(m.clone())),
            None => Ok(()),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &str {
        &self.columns
    }

    pub fn count_mode(&self) -> Option<CountMode> {
        self.count
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<&Ordering> {
        self.order.as_ref()
    }

    pub fn limit_count(&self) -> Option<usize> {
        self.limit
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// True when the row satisfies every filter.
    pub fn matches(&self, row: &Row) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }
}

/// Rows of a result: a collection, or at most one row when `single()` was requested.
#[derive(Clone, Debug, PartialEq)]
pub enum Data {
    Many(Vec<Row>),
    One(Option<Row>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryResult {
    pub data: Data,
    pub count: Option<u64>,
}

impl QueryResult {
    /// Shape rows for the query: the first row (or none) when single, else the full set.
    pub fn for_query(query: &Query, rows: Vec<Row>, count: Option<u64>) -> Self {
        let data = if query.is_single() {
            Data::One(rows.into_iter().next())
        } else {
            Data::Many(rows)
        };
        QueryResult { data, count }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.data {
            Data::Many(rows) => rows,
            Data::One(Some(row)) => std::slice::from_ref(row),
            Data::One(None) => &[],
        }
    }

    pub fn into_rows(self) -> Vec<Row> {
        match self.data {
            Data::Many(rows) => rows,
            Data::One(row) => row.into_iter().collect(),
        }
    }

    pub fn into_single(self) -> Option<Row> {
        match self.data {
            Data::Many(rows) => rows.into_iter().next(),
            Data::One(row) => row,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
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
    fn select_is_the_default_intent() {
        let q = Query::new("pets").eq("id", "1");
        assert_eq!(q.intent(), &Intent::Select);
        assert_eq!(q.columns(), "*");
        assert!(q.validate().is_ok());
    }

    #[test]
    fn chaining_does_not_touch_the_forked_query() {
        let base = Query::new("pets").eq("location", "台北市");
        let narrowed = base.clone().eq("size", "大型").limit(1);
        assert_eq!(base.filters().len(), 1);
        assert_eq!(base.limit_count(), None);
        assert_eq!(narrowed.filters().len(), 2);
    }

    #[test]
    fn later_order_replaces_earlier() {
        let q = Query::new("stories").order("created_at", true).order("author", false);
        assert_eq!(
            q.ordering(),
            Some(&Ordering {
                column: "author".into(),
                descending: false
            })
        );
    }

    #[test]
    fn two_terminal_operations_are_rejected() {
        let q = Query::new("favorites").delete().insert(row(json!({"pet_id": "2"})));
        match q.validate() {
            Err(QueryError::Usage(msg)) => assert!(msg.contains("insert called on a delete query")),
            other => panic!("expected usage error, got {:?}", other),
        }
        assert!(Query::new("pets").update(Row::new()).select("*").validate().is_err());
        assert!(Query::new("pets").select("id").update(Row::new()).validate().is_err());
    }

    #[test]
    fn reselecting_columns_is_allowed() {
        let q = Query::new("pets").select("id").select_with_count("id,name", CountMode::Exact);
        assert!(q.validate().is_ok());
        assert_eq!(q.columns(), "id,name");
        assert_eq!(q.count_mode(), Some(CountMode::Exact));
    }

    #[test]
    fn single_row_and_batch_insert_are_equivalent() {
        let r = row(json!({"user_id": "u", "pet_id": "2"}));
        let one = Query::new("favorites").insert(r.clone());
        let many = Query::new("favorites").insert(vec![r]);
        assert_eq!(one.intent(), many.intent());
    }

    #[test]
    fn filters_are_conjunctive() {
        let q = Query::new("messages")
            .eq("thread_id", "t1")
            .eq("is_read", false)
            .in_list("sender", ["other", "shelter"]);
        assert!(q.matches(&row(json!({"thread_id": "t1", "is_read": false, "sender": "other"}))));
        assert!(!q.matches(&row(json!({"thread_id": "t1", "is_read": true, "sender": "other"}))));
        assert!(!q.matches(&row(json!({"thread_id": "t1", "is_read": false, "sender": "user"}))));
        assert!(!q.matches(&row(json!({"thread_id": "t1", "sender": "other"}))));
    }

    #[test]
    fn filter_comparison_is_exact() {
        let q = Query::new("pets").eq("id", "1");
        assert!(!q.matches(&row(json!({"id": 1}))));
        assert!(q.matches(&row(json!({"id": "1"}))));
    }

    #[test]
    fn single_result_keeps_first_row_only() {
        let q = Query::new("pets").single();
        let rows = vec![row(json!({"id": "1"})), row(json!({"id": "2"}))];
        let result = QueryResult::for_query(&q, rows, None);
        assert_eq!(result.data, Data::One(Some(row(json!({"id": "1"})))));

        let none = QueryResult::for_query(&q, Vec::new(), None);
        assert_eq!(none.data, Data::One(None));
        assert!(none.is_empty());
    }

    #[test]
    fn to_row_rejects_non_objects() {
        assert!(to_row(&json!({"a": 1})).is_ok());
        assert!(matches!(to_row(&json!([1, 2])), Err(QueryError::Usage(_))));
    }
}
