use chrono::{DateTime, Utc};
use serde_json::Value;

use super::report_document::{
    CameraSection, EventsAndRoadworkSection, ListRowSection, Report, RouteSection,
    ServiceVehicleSection, ThirdPartySection, TileLegend, TrafficSpeedSection,
};
use crate::camera::CameraMatchResult;
use crate::config::CorridorConfig;
use crate::model::{ListRow, MapIcon, RouteDetails};

pub const TRAFFIC_SPEED_NOTE: &str = "Traffic speeds are delivered as colorized tiles; numeric per-segment speeds are not exposed. Only a route-average speed derived from the stated travel time and distance is available.";

pub const THIRD_PARTY_NOTE: &str = "Third-party incident feeds can legitimately be empty at collection time.";

/// known quirks of the source service, surfaced to operators with every report.
pub const CAVEATS: [&str; 5] = [
    "A login modal can appear after route generation and must be dismissed before the route summary is readable.",
    "Autocomplete can leave destination suggestions open; the destination must be confirmed before the route is generated.",
    "Road condition and forecast layers conflict with the traffic speed layer in the map UI.",
    "Traffic speeds are tile-based, not row-based, so numeric speeds are not listed in any report API.",
    "Camera map icons do not include camera names; names and image urls are resolved through the per-camera tooltip endpoint.",
];

/// everything collected during a run, handed to [`assemble_report`].
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub route: RouteDetails,
    pub cameras: CameraMatchResult,
    /// the complete service vehicle feed
    pub vehicles: Vec<MapIcon>,
    /// service vehicles inside the corridor
    pub vehicles_near_route: Vec<MapIcon>,
    /// road condition rows already filtered for corridor relevance
    pub road_conditions: Vec<ListRow>,
    /// forecast rows already filtered for corridor relevance
    pub forecasts: Vec<ListRow>,
    pub incidents: Vec<Value>,
    pub traffic_jams: Vec<Value>,
    pub weather_hazards: Vec<Value>,
    /// every tile url covering the corridor
    pub tile_urls: Vec<String>,
}

/// composes the final report. counts are derived here from the collected rows.
pub fn assemble_report(
    inputs: ReportInputs,
    config: &CorridorConfig,
    generated_at: DateTime<Utc>,
) -> Report {
    let ReportInputs {
        route,
        cameras,
        vehicles,
        vehicles_near_route,
        road_conditions,
        forecasts,
        incidents,
        traffic_jams,
        weather_hazards,
        tile_urls,
    } = inputs;

    let traffic_speed = TrafficSpeedSection {
        note: String::from(TRAFFIC_SPEED_NOTE),
        average_from_route_time_kmh: route.avg_speed_kmh,
        tile_legend: TileLegend::default(),
        sample_tile_urls: tile_urls
            .into_iter()
            .take(config.tile_sample_size)
            .collect(),
    };

    let events_and_roadwork = EventsAndRoadworkSection {
        events_count: route.events,
        current_roadwork: route.current_roadwork.clone(),
        construction_items: route.construction_items.clone(),
    };

    let camera_section = CameraSection {
        primary_route_camera_names: route.camera_names.clone(),
        matched: cameras.matched,
        missing_names: cameras.unresolved,
    };

    let service_vehicles = ServiceVehicleSection {
        total: vehicles.len(),
        near_route_count: vehicles_near_route.len(),
        near_route: vehicles_near_route,
    };

    let third_party = ThirdPartySection {
        incidents_count: incidents.len(),
        traffic_jams_count: traffic_jams.len(),
        weather_hazards_count: weather_hazards.len(),
        incidents,
        traffic_jams,
        weather_hazards,
        note: String::from(THIRD_PARTY_NOTE),
    };

    Report {
        generated_at,
        route: RouteSection {
            start: config.start_label.clone(),
            end: config.end_label.clone(),
            primary: route,
            traffic_speed,
        },
        events_and_roadwork,
        cameras: camera_section,
        service_vehicles,
        road_conditions: list_section(road_conditions),
        forecasted_driving_conditions: list_section(forecasts),
        third_party,
        caveats: CAVEATS.iter().map(|c| c.to_string()).collect(),
    }
}

fn list_section(rows: Vec<ListRow>) -> ListRowSection {
    ListRowSection {
        count: rows.len(),
        rows,
    }
}
