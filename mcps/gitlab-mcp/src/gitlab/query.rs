//! Translation of typed request parameters into GitLab's wire conventions
//!
//! Request types serialize to a JSON object. Routing fields (the ones that
//! end up in the URL path) and absent values are stripped, and what remains
//! is either sent as a JSON body (POST/PUT) or flattened into query pairs
//! (GET/DELETE) by [`encode_query`].

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::GitLabResult;

/// A request type where some fields address the resource instead of
/// being sent as parameters
pub trait Routed: Serialize {
    /// Field names consumed by the URL path
    const ROUTE_FIELDS: &'static [&'static str];
}

/// Serialize `params` into the parameter map sent to GitLab
///
/// Route fields and `null`s are removed, so an absent filter never reaches
/// the remote call.
pub fn outgoing<P: Routed>(params: &P) -> GitLabResult<Value> {
    let mut fields = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "request parameters must serialize to an object, got {other}"
            ))
            .into())
        }
    };

    for key in P::ROUTE_FIELDS {
        fields.remove(*key);
    }
    fields.retain(|_, v| !v.is_null());

    Ok(Value::Object(fields))
}

/// Flatten a parameter object into query pairs
///
/// - booleans become `"true"` / `"false"`
/// - arrays become indexed keys: `iids[0]=3&iids[1]=7`
/// - `null`s and empty arrays are dropped
pub fn encode_query(params: &Value) -> Vec<(String, String)> {
    let Value::Object(fields) = params else {
        return Vec::new();
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if let Some(v) = scalar(item) {
                        pairs.push((format!("{key}[{i}]"), v));
                    }
                }
            }
            other => {
                if let Some(v) = scalar(other) {
                    pairs.push((key.clone(), v));
                }
            }
        }
    }
    pairs
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        nested => Some(nested.to_string()),
    }
}

/// Split a comma-separated label string into trimmed, non-empty names
pub fn split_labels(labels: &str) -> Vec<String> {
    labels
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[derive(Serialize)]
    struct Filters {
        project_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        confidential: Option<bool>,
        iids: Vec<u64>,
        created_after: Option<chrono::DateTime<Utc>>,
    }

    impl Routed for Filters {
        const ROUTE_FIELDS: &'static [&'static str] = &["project_id"];
    }

    fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_outgoing_drops_route_fields_and_nulls() {
        let params = Filters {
            project_id: 42,
            state: None,
            confidential: None,
            iids: vec![],
            created_after: None,
        };
        let value = outgoing(&params).unwrap();
        assert_eq!(value, json!({ "iids": [] }));
        assert!(encode_query(&value).is_empty());
    }

    #[test]
    fn test_booleans_are_lowercase_strings() {
        let pairs = encode_query(&json!({ "confidential": true, "archived": false }));
        assert_eq!(lookup(&pairs, "confidential"), Some("true"));
        assert_eq!(lookup(&pairs, "archived"), Some("false"));
    }

    #[test]
    fn test_iids_use_indexed_keys() {
        let pairs = encode_query(&json!({ "iids": [3, 7] }));
        assert_eq!(
            pairs,
            vec![
                ("iids[0]".to_string(), "3".to_string()),
                ("iids[1]".to_string(), "7".to_string()),
            ]
        );
        assert!(lookup(&pairs, "iids").is_none());
    }

    #[test]
    fn test_timestamps_are_iso8601() {
        let params = Filters {
            project_id: 1,
            state: Some("opened".into()),
            confidential: Some(false),
            iids: vec![],
            created_after: Some(Utc.with_ymd_and_hms(2019, 3, 15, 8, 0, 0).unwrap()),
        };
        let pairs = encode_query(&outgoing(&params).unwrap());
        assert_eq!(lookup(&pairs, "created_after"), Some("2019-03-15T08:00:00Z"));
        assert_eq!(lookup(&pairs, "state"), Some("opened"));
        assert_eq!(lookup(&pairs, "confidential"), Some("false"));
        assert!(lookup(&pairs, "project_id").is_none());
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(split_labels(" bug, feature ,,"), vec!["bug", "feature"]);
        assert!(split_labels(" , ").is_empty());
    }
}
