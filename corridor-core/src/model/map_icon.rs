use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::GeoPoint;

/// response envelope of a map-icon endpoint. the icon list lives under `item2`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapIconFeed<T> {
    #[serde(default = "Vec::new")]
    pub item2: Vec<T>,
}

impl<T> MapIconFeed<T> {
    pub fn into_items(self) -> Vec<T> {
        self.item2
    }
}

/// a single map icon. only the identifier and location are interpreted,
/// every other field is carried through to the report untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapIcon {
    #[serde(default, deserialize_with = "deserialize_item_id")]
    pub item_id: Option<String>,
    pub location: GeoPoint,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// item identifiers show up as either strings or bare numbers depending on the layer.
fn deserialize_item_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unexpected itemId value: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed_with_mixed_ids() {
        let json = r#"{
            "item1": "ignored",
            "item2": [
                { "itemId": "cam-1", "location": [43.8, -79.1], "icon": "camera" },
                { "itemId": 42, "location": [43.9, -78.9] },
                { "location": [44.5, -80.0] }
            ]
        }"#;
        let feed: MapIconFeed<MapIcon> = serde_json::from_str(json).unwrap();
        let items = feed.into_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].item_id.as_deref(), Some("cam-1"));
        assert_eq!(items[0].extra.get("icon"), Some(&Value::from("camera")));
        assert_eq!(items[1].item_id.as_deref(), Some("42"));
        assert_eq!(items[2].item_id, None);
    }

    #[test]
    fn test_missing_item_array_is_empty() {
        let feed: MapIconFeed<Value> = serde_json::from_str("{}").unwrap();
        assert!(feed.into_items().is_empty());
    }

    #[test]
    fn test_serialize_keeps_extra_fields() {
        let json = r#"{ "itemId": "p-7", "location": [43.8, -79.1], "heading": 90 }"#;
        let icon: MapIcon = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&icon).unwrap();
        assert_eq!(out["itemId"], "p-7");
        assert_eq!(out["heading"], 90);
        assert_eq!(out["location"][0], 43.8);
    }
}
