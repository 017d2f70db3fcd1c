use serde::{Deserialize, Serialize};

use super::list_query::{ListColumn, ListOrder};

/// the paginated list feeds consulted for a report. each feed declares its
/// own columns and sort order, pagination is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListFeedKind {
    RoadConditions,
    ForecastedDrivingConditions,
}

impl ListFeedKind {
    /// path segment of the feed on the list endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ListFeedKind::RoadConditions => "RoadConditions",
            ListFeedKind::ForecastedDrivingConditions => "ForecastedDrivingConditions",
        }
    }

    pub fn columns(&self) -> Vec<ListColumn> {
        let names: &[&str] = match self {
            ListFeedKind::RoadConditions => &[
                "roadway",
                "description",
                "primaryCondition",
                "secondaryConditions",
                "visibility",
                "drifting",
                "lastUpdated",
                "area",
            ],
            ListFeedKind::ForecastedDrivingConditions => &[
                "roadway",
                "description",
                "forecast",
                "timeframe",
                "date",
                "region",
            ],
        };
        std::iter::once(ListColumn::placeholder())
            .chain(names.iter().map(|n| ListColumn::sortable(n)))
            .collect()
    }

    /// road conditions sort by roadway, forecasts by description.
    pub fn order(&self) -> Vec<ListOrder> {
        let column = match self {
            ListFeedKind::RoadConditions => 1,
            ListFeedKind::ForecastedDrivingConditions => 2,
        };
        vec![ListOrder::ascending(column)]
    }
}

impl std::fmt::Display for ListFeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
