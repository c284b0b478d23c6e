use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One decoded log line: an open-ended mapping of field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Aggregation key for the given field.
    ///
    /// A missing or `null` field yields `None`.
    pub fn handler(&self, field: &str) -> Option<Handler> {
        match self.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(Handler::Text(s.clone())),
            other => Some(Handler::Value(other.to_string())),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Aggregation key taken from a record's endpoint field.
///
/// A JSON string and any other JSON value are distinct keys even when they
/// print the same, so `"42"` and `42` never share a row. Records without an
/// endpoint are grouped under `None` wherever a handler is optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Handler {
    /// A JSON string, kept verbatim.
    Text(String),
    /// Any other non-null JSON value, held as its JSON text.
    Value(String),
}

impl Handler {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Display form used by renderers.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Value(s) => s,
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Handler {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

/// Names of the fields the pipeline reads from each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldNames {
    pub timestamp: String,
    pub endpoint: String,
    pub response_time: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            timestamp: "@timestamp".to_string(),
            endpoint: "url".to_string(),
            response_time: "response_time".to_string(),
        }
    }
}
