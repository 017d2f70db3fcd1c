use itertools::Itertools;

use crate::config::CorridorConfig;
use crate::model::ListRow;

/// row fields searched for corridor place names.
const KEYWORD_FIELDS: [&str; 4] = ["roadway", "description", "area", "region"];

/// predicate for testing whether a list feed row concerns the corridor.
/// a row is relevant when its roadway is the corridor highway AND one of
/// its free-text fields mentions a corridor place name.
#[derive(Debug, Clone)]
pub struct RouteRelevanceFilter {
    highway_aliases: Vec<String>,
    place_keywords: Vec<String>,
}

impl RouteRelevanceFilter {
    pub fn new<S: AsRef<str>>(highway_aliases: &[S], place_keywords: &[S]) -> Self {
        let lower = |v: &[S]| {
            v.iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect_vec()
        };
        Self {
            highway_aliases: lower(highway_aliases),
            place_keywords: lower(place_keywords),
        }
    }

    pub fn is_route_relevant(&self, row: &ListRow) -> bool {
        self.matches_highway(row) && self.matches_place(row)
    }

    fn matches_highway(&self, row: &ListRow) -> bool {
        let roadway = row
            .text_field("roadway")
            .map(|r| r.trim().to_lowercase())
            .unwrap_or_default();
        self.highway_aliases.iter().any(|alias| *alias == roadway)
    }

    fn matches_place(&self, row: &ListRow) -> bool {
        let text = KEYWORD_FIELDS
            .iter()
            .map(|f| row.text_field(f).unwrap_or_default())
            .join(" ")
            .to_lowercase();
        self.place_keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// keeps only the relevant rows, preserving order.
    pub fn filter_rows(&self, rows: Vec<ListRow>) -> Vec<ListRow> {
        rows.into_iter()
            .filter(|r| self.is_route_relevant(r))
            .collect()
    }
}

impl From<&CorridorConfig> for RouteRelevanceFilter {
    fn from(value: &CorridorConfig) -> Self {
        Self::new(&value.highway_aliases, &value.place_keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> ListRow {
        serde_json::from_value(value).unwrap()
    }

    fn filter() -> RouteRelevanceFilter {
        RouteRelevanceFilter::from(&CorridorConfig::default())
    }

    #[test]
    fn test_highway_and_place_match() {
        let r = row(json!({ "roadway": "Highway 401", "description": "Brock Rd to Westney Rd" }));
        assert!(filter().is_route_relevant(&r));
        let r = row(json!({ "roadway": " 401 ", "description": "", "area": "Durham", "region": "Oshawa" }));
        assert!(filter().is_route_relevant(&r));
    }

    #[test]
    fn test_highway_spelling_is_case_insensitive() {
        let r = row(json!({ "roadway": "HIGHWAY 401", "description": "near AJAX" }));
        assert!(filter().is_route_relevant(&r));
    }

    #[test]
    fn test_wrong_highway_rejected_even_with_place() {
        let r = row(json!({ "roadway": "Highway 407", "description": "Pickering" }));
        assert!(!filter().is_route_relevant(&r));
        // roadway must match exactly, not as a substring
        let r = row(json!({ "roadway": "Highway 401 Collectors", "description": "Pickering" }));
        assert!(!filter().is_route_relevant(&r));
    }

    #[test]
    fn test_highway_without_place_rejected() {
        let r = row(json!({ "roadway": "401", "description": "Windsor to London" }));
        assert!(!filter().is_route_relevant(&r));
        let r = row(json!({ "roadway": "401" }));
        assert!(!filter().is_route_relevant(&r));
    }

    #[test]
    fn test_filter_rows_preserves_order() {
        let rows = vec![
            row(json!({ "roadway": "401", "description": "Whitby", "id": 1 })),
            row(json!({ "roadway": "2", "description": "Whitby", "id": 2 })),
            row(json!({ "roadway": "401", "description": "Thickson Rd", "id": 3 })),
        ];
        let kept = filter().filter_rows(rows);
        let ids = kept.iter().filter_map(|r| r.text_field("id")).collect_vec();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
