use serde::Serialize;

use super::ListFeedKind;

/// column declaration sent with every list request. the leading column is
/// an unnamed placeholder, the rest are named and sortable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListColumn {
    Placeholder { data: Option<String>, name: String },
    Named { name: String, s: bool },
}

impl ListColumn {
    pub fn placeholder() -> Self {
        Self::Placeholder {
            data: None,
            name: String::new(),
        }
    }

    pub fn sortable(name: &str) -> Self {
        Self::Named {
            name: name.to_string(),
            s: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListOrder {
    pub column: usize,
    pub dir: String,
}

impl ListOrder {
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            dir: String::from("asc"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSearch {
    pub value: String,
}

/// the query object of one list page request, sent JSON-encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    pub columns: Vec<ListColumn>,
    pub order: Vec<ListOrder>,
    pub start: usize,
    pub length: usize,
    pub search: ListSearch,
}

impl ListQuery {
    pub fn new(kind: ListFeedKind, start: usize, length: usize) -> Self {
        Self {
            columns: kind.columns(),
            order: kind.order(),
            start,
            length,
            search: ListSearch::default(),
        }
    }
}
