//! Frontend Models
//!
//! Data structures matching the todo endpoint's JSON.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier.
///
/// Opaque to the client: servers hand out either strings (document ids)
/// or numbers, and both are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Creation or last update time, as reported by the server
    #[serde(rename = "dateTime", default, deserialize_with = "lenient_date_time")]
    pub date_time: Option<NaiveDateTime>,
}

impl Todo {
    /// Timestamp line shown under the description, if the server sent one
    pub fn timestamp_label(&self) -> Option<String> {
        self.date_time.map(|dt| format!("Updated {}", dt.format("%Y-%m-%d %H:%M")))
    }
}

/// Body for create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoPayload {
    pub title: String,
    pub description: String,
}

/// A timestamp in an unexpected shape must not sink the whole list
fn lenient_date_time<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse::<NaiveDateTime>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_numeric_and_string_ids() {
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "A", "description": "a"},
                {"id": "665f1c2ab4e3a90d1c7e5b21", "title": "B", "description": "b"}
            ]"#,
        )
        .unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, TodoId::new("1"));
        assert_eq!(todos[0].title, "A");
        assert_eq!(todos[0].description, "a");
        assert_eq!(todos[1].id.as_str(), "665f1c2ab4e3a90d1c7e5b21");
        assert_eq!(todos[0].date_time, None);
    }

    #[test]
    fn test_date_time_parsed() {
        let todo: Todo = serde_json::from_str(
            r#"{"id": "x", "title": "t", "description": "d",
                "dateTime": "2024-05-01T10:15:30.123"}"#,
        )
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_milli_opt(10, 15, 30, 123)
            .unwrap();
        assert_eq!(todo.date_time, Some(expected));
        assert_eq!(todo.timestamp_label().as_deref(), Some("Updated 2024-05-01 10:15"));
    }

    #[test]
    fn test_date_time_lenient() {
        // Array-encoded and null timestamps are dropped, not rejected
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "t", "description": "d", "dateTime": [2024, 5, 1, 10, 15]},
                {"id": 2, "title": "t", "description": "d", "dateTime": null},
                {"id": 3, "title": "t", "description": "d", "dateTime": "yesterday"}
            ]"#,
        )
        .unwrap();

        assert!(todos.iter().all(|t| t.date_time.is_none()));
        assert!(todos[0].timestamp_label().is_none());
    }

    #[test]
    fn test_missing_text_fields_default_empty() {
        let todo: Todo = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(todo.id.to_string(), "7");
        assert_eq!(todo.title, "");
        assert_eq!(todo.description, "");
    }

    #[test]
    fn test_payload_shape() {
        let payload = TodoPayload {
            title: "Buy milk".to_string(),
            description: "2 litres".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Buy milk", "description": "2 litres"}));
    }
}
