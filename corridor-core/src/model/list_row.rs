use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// one row of a paginated list feed. column sets differ per feed, so the
/// row is kept as the JSON object the service returned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListRow(pub Map<String, Value>);

impl ListRow {
    /// string rendering of a field. numbers and booleans are stringified,
    /// null and missing fields become None.
    pub fn text_field(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Map<String, Value>> for ListRow {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// one page of a list feed response.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    #[serde(default)]
    pub data: Vec<ListRow>,
    #[serde(default)]
    pub records_total: usize,
}
