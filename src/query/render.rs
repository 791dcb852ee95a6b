//! Renders a query into one PostgREST-style HTTP request (method, query params, Prefer header, JSON body).

use super::{Filter, Intent, Query};
use reqwest::Method;
use serde_json::Value;

pub const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Clone, Debug, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub params: Vec<(String, String)>,
    pub prefer: String,
    pub body: Option<Value>,
}

/// Text form of a filter operand: strings verbatim, other scalars as JSON text.
fn operand(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Items inside `in.( … )` are double-quoted when they contain list delimiters.
fn list_item(value: &Value) -> String {
    let text = operand(value);
    let reserved = text.is_empty() || text.chars().any(|c| matches!(c, ',' | '(' | ')' | '"' | '\\') || c.is_whitespace());
    if reserved {
        format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        text
    }
}

pub fn render_filter(filter: &Filter) -> (String, String) {
    match filter {
        Filter::Eq { column, value } => (column.clone(), format!("eq.{}", operand(value))),
        Filter::In { column, values } => {
            let items: Vec<String> = values.iter().map(list_item).collect();
            (column.clone(), format!("in.({})", items.join(",")))
        }
    }
}

fn filter_params(query: &Query) -> Vec<(String, String)> {
    query.filters().iter().map(render_filter).collect()
}

/// Build the request for a validated query. Filters keep declaration order, one parameter each.
pub fn render(query: &Query) -> RestRequest {
    match query.intent() {
        Intent::Select => {
            let mut params = vec![("select".to_string(), query.columns().to_string())];
            params.extend(filter_params(query));
            if let Some(o) = query.ordering() {
                let dir = if o.descending { "desc" } else { "asc" };
                params.push(("order".into(), format!("{}.{}", o.column, dir)));
            }
            if let Some(n) = query.limit_count().filter(|n| *n > 0) {
                params.push(("limit".into(), n.to_string()));
            }
            let prefer = match query.count_mode() {
                Some(mode) => format!("count={}", mode.as_str()),
                None => RETURN_REPRESENTATION.to_string(),
            };
            RestRequest {
                method: Method::GET,
                params,
                prefer,
                body: None,
            }
        }
        Intent::Insert(rows) => RestRequest {
            method: Method::POST,
            params: Vec::new(),
            prefer: RETURN_REPRESENTATION.to_string(),
            body: Some(Value::Array(rows.iter().cloned().map(Value::Object).collect())),
        },
        Intent::Update(patch) => RestRequest {
            method: Method::PATCH,
            params: filter_params(query),
            prefer: RETURN_REPRESENTATION.to_string(),
            body: Some(Value::Object(patch.clone())),
        },
        Intent::Delete => RestRequest {
            method: Method::DELETE,
            params: filter_params(query),
            prefer: RETURN_REPRESENTATION.to_string(),
            body: None,
        },
    }
}

/// Total from a `content-range` header such as `0-24/3573`. `*` or a malformed header yields None.
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.rsplit_once('/')?;
    total.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{CountMode, Row};
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn select_renders_filters_in_call_order() {
        let q = Query::new("pets")
            .select("*")
            .eq("location", "台北市")
            .eq("size", "大型")
            .order("created_at", true)
            .limit(10);
        let req = render(&q);
        assert_eq!(req.method, Method::GET);
        assert_eq!(
            req.params,
            params(&[
                ("select", "*"),
                ("location", "eq.台北市"),
                ("size", "eq.大型"),
                ("order", "created_at.desc"),
                ("limit", "10"),
            ])
        );
        assert_eq!(req.prefer, RETURN_REPRESENTATION);
        assert!(req.body.is_none());
    }

    #[test]
    fn repeated_column_filters_are_all_kept() {
        let q = Query::new("pets").eq("id", "1").in_list("id", ["1", "2"]);
        let req = render(&q);
        assert_eq!(
            req.params,
            params(&[("select", "*"), ("id", "eq.1"), ("id", "in.(1,2)")])
        );
    }

    #[test]
    fn non_string_operands_use_json_text() {
        let q = Query::new("messages").eq("is_read", false).eq("priority", 3);
        let req = render(&q);
        assert_eq!(req.params[1], ("is_read".into(), "eq.false".into()));
        assert_eq!(req.params[2], ("priority".into(), "eq.3".into()));
    }

    #[test]
    fn list_items_with_delimiters_are_quoted() {
        let (_, v) = render_filter(&Filter::In {
            column: "name".into(),
            values: vec![json!("a,b"), json!("plain"), json!("say \"hi\"")],
        });
        assert_eq!(v, r#"in.("a,b",plain,"say \"hi\"")"#);
    }

    #[test]
    fn count_request_changes_prefer_header() {
        let q = Query::new("favorites")
            .select_with_count("id", CountMode::Exact)
            .eq("user_id", "u");
        assert_eq!(render(&q).prefer, "count=exact");
    }

    #[test]
    fn insert_always_sends_an_array() {
        let mut r = Row::new();
        r.insert("pet_id".into(), json!("2"));
        let req = render(&Query::new("favorites").insert(r));
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.body, Some(json!([{"pet_id": "2"}])));
        assert!(req.params.is_empty());
    }

    #[test]
    fn update_and_delete_carry_only_filters() {
        let mut patch = Row::new();
        patch.insert("status".into(), json!("adopted"));
        let upd = render(&Query::new("pet_listings").update(patch).eq("id", "L1").limit(5));
        assert_eq!(upd.method, Method::PATCH);
        assert_eq!(upd.params, params(&[("id", "eq.L1")]));
        assert_eq!(upd.body, Some(json!({"status": "adopted"})));

        let del = render(&Query::new("favorites").delete().eq("user_id", "u").eq("pet_id", "2"));
        assert_eq!(del.method, Method::DELETE);
        assert_eq!(del.params, params(&[("user_id", "eq.u"), ("pet_id", "eq.2")]));
        assert!(del.body.is_none());
    }

    #[test]
    fn zero_limit_is_not_sent() {
        let req = render(&Query::new("pets").limit(0));
        assert_eq!(req.params, params(&[("select", "*")]));
    }

    #[test]
    fn content_range_total() {
        assert_eq!(parse_content_range("0-24/3573"), Some(3573));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-24/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
