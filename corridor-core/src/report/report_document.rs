use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::model::{ListRow, MapIcon, MatchedCamera, RouteDetails};

/// the assembled route health report, written out as one JSON document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub route: RouteSection,
    pub events_and_roadwork: EventsAndRoadworkSection,
    pub cameras: CameraSection,
    pub service_vehicles: ServiceVehicleSection,
    pub road_conditions: ListRowSection,
    pub forecasted_driving_conditions: ListRowSection,
    pub third_party: ThirdPartySection,
    pub caveats: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSection {
    pub start: String,
    pub end: String,
    pub primary: RouteDetails,
    pub traffic_speed: TrafficSpeedSection,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSpeedSection {
    pub note: String,
    pub average_from_route_time_kmh: Option<f64>,
    pub tile_legend: TileLegend,
    pub sample_tile_urls: Vec<String>,
}

/// colour key of the traffic speed tile layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLegend {
    pub closed_stopped: String,
    pub slow: String,
    pub medium: String,
    pub fast: String,
}

impl Default for TileLegend {
    fn default() -> Self {
        Self {
            closed_stopped: String::from("#808080 / stopped"),
            slow: String::from("#4D0001 to #CC0004"),
            medium: String::from("#F4FF24"),
            fast: String::from("#249D74"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsAndRoadworkSection {
    pub events_count: u32,
    pub current_roadwork: Option<String>,
    pub construction_items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSection {
    pub primary_route_camera_names: Vec<String>,
    pub matched: Vec<MatchedCamera>,
    pub missing_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceVehicleSection {
    pub total: usize,
    pub near_route_count: usize,
    pub near_route: Vec<MapIcon>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRowSection {
    pub rows: Vec<ListRow>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartySection {
    pub incidents_count: usize,
    pub traffic_jams_count: usize,
    pub weather_hazards_count: usize,
    pub incidents: Vec<Value>,
    pub traffic_jams: Vec<Value>,
    pub weather_hazards: Vec<Value>,
    pub note: String,
}
