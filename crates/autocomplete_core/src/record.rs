use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// One result item as handed back by the host's transformer.
pub type Record = Map<String, Value>;

/// Host-supplied mapping from a raw response body to display records.
///
/// The core never looks inside the response; this is the only place that knows
/// its shape.
#[derive(Clone)]
pub struct Transformer(Arc<dyn Fn(&Value) -> Vec<Record> + Send + Sync>);

impl Transformer {
    pub fn new(f: impl Fn(&Value) -> Vec<Record> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Collects the objects of the array found at `pointer` (RFC 6901).
    /// Missing paths and non-object entries are skipped.
    pub fn from_pointer(pointer: impl Into<String>) -> Self {
        let pointer = pointer.into();
        Self::new(move |value| {
            value
                .pointer(&pointer)
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_object().cloned())
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    pub fn apply(&self, data: &Value) -> Vec<Record> {
        (self.0)(data)
    }
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transformer(..)")
    }
}

impl PartialEq for Transformer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Transformer {}

/// Display text of the search-key field. Scalars use their JSON text; missing,
/// null and nested values give an empty string.
pub fn record_key(record: &Record, search_key: &str) -> String {
    match record.get(search_key) {
        Some(Value::String(text)) => text.clone(),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => value.to_string(),
        _ => String::new(),
    }
}
