//! Normalized documents sent to the search engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered field map produced by a document mapper.
///
/// Fields keep their insertion order when serialized. There is no fixed
/// schema: profile documents carry whatever attributes the source object has.
///
/// # Example
///
/// ```
/// use es_indexer_shared::Document;
///
/// let doc = Document::new()
///     .with("title", "Release notes")
///     .with("createdDate", 1_700_000_000_000i64)
///     .with("updatedDate", None::<i64>);
///
/// assert_eq!(
///     doc.to_json().unwrap(),
///     r#"{"title":"Release notes","createdDate":1700000000000,"updatedDate":null}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field. Re-inserting an existing field replaces its value and keeps
    /// its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Field names in document order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to a compact JSON object string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
