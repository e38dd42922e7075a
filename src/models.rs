pub mod design;
pub mod video;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Record ids in the published JSON are usually numbers, but hand-edited
/// files sometimes quote them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Card `data-id`: the record's own id, else its 1-based position.
pub(crate) fn display_id(id: Option<&RecordId>, index: usize) -> String {
    match id {
        Some(RecordId::Text(s)) if s.is_empty() => (index + 1).to_string(),
        Some(id) => id.to_string(),
        None => (index + 1).to_string(),
    }
}

/// Any JSON scalar as text: strings as-is, numbers and booleans in their
/// JSON spelling. Objects, arrays and `null` read as absent.
pub(crate) fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Optional text field that never fails the record.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Text field that reads as empty when absent or unusable.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Integer ids stay numeric; any other scalar is kept as text.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => RecordId::Number(i),
            None => RecordId::Text(n.to_string()),
        }),
        other => scalar_text(other).map(RecordId::Text),
    })
}

/// A list of records. Anything but an array reads as empty, and an entry
/// that is not an object becomes a blank record instead of failing the list.
pub(crate) fn record_list<T>(value: Value) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(record_list(Value::deserialize(deserializer)?))
}

/// `Some` only for non-empty strings.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
