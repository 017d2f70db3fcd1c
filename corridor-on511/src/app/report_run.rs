use std::path::{Path, PathBuf};

use chrono::Utc;
use corridor_core::{
    camera::{match_cameras, TooltipSource},
    extract::RouteTextExtractor,
    filter::{filter_in_corridor, RouteRelevanceFilter},
    model::{CameraCandidate, MapIcon, RouteDetails},
    paginate::{ListFeedKind, ListPaginator, PageSource},
    report::{assemble_report, Report, ReportInputs},
    tile::tile_urls_for_bbox,
    CorridorReportError,
};
use serde_json::Value;

use super::ReportSettings;
use crate::client::{MapIconLayer, MapIconSource, On511Client};
use crate::util::fs;

pub const REPORT_FILENAME: &str = "route_report.json";

/// builds the route health report for the route text at `route_text` and
/// writes it to `output_directory`. returns the path of the written report.
pub fn run(
    route_text: &str,
    settings: &ReportSettings,
    output_directory: &Path,
) -> Result<PathBuf, CorridorReportError> {
    let text = fs::read_route_block(route_text)?;
    let client = On511Client::try_from(&settings.service)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            CorridorReportError::TokioError(format!(
                "failure creating async rust tokio runtime: {e}"
            ))
        })?;
    let report = runtime.block_on(collect_report(&client, settings, &text))?;

    let path = fs::write_json(&report, REPORT_FILENAME, output_directory)?;
    log::info!("{}", summary_line(&report));
    log::info!("wrote report to {}", path.display());
    Ok(path)
}

/// parses the route text with the configured extractor.
pub fn extract_route(
    text: &str,
    settings: &ReportSettings,
) -> Result<RouteDetails, CorridorReportError> {
    let extractor = RouteTextExtractor::try_from(&settings.corridor)?;
    if !extractor.looks_like_route_block(text) {
        log::warn!("route text is missing the total time/distance labels, fields may be empty");
    }
    extractor.extract(Some(text))
}

/// collects every feed and assembles the report. the camera tooltip
/// lookups run first and sequentially; the remaining feeds are fetched
/// concurrently afterwards. any fatal error aborts the whole run.
pub async fn collect_report<S>(
    client: &S,
    settings: &ReportSettings,
    text: &str,
) -> Result<Report, CorridorReportError>
where
    S: MapIconSource + PageSource + TooltipSource,
{
    let corridor = &settings.corridor;
    let route = extract_route(text, settings)?;
    log::info!(
        "route: {} min, {}, {} cameras named",
        route.time.as_ref().map(|t| t.minutes).unwrap_or_default(),
        route
            .distance
            .as_ref()
            .map(|d| d.text.as_str())
            .unwrap_or("unknown distance"),
        route.camera_names.len()
    );

    let camera_icons = client.map_icons::<MapIcon>(MapIconLayer::Cameras).await?;
    let candidates = filter_in_corridor(
        camera_icons.iter().filter_map(CameraCandidate::from_icon),
        &corridor.bbox,
    );
    log::info!(
        "{} of {} camera icons inside the corridor",
        candidates.len(),
        camera_icons.len()
    );
    let cameras = match_cameras(route.camera_names.as_slice(), &candidates, client).await?;

    let paginator = ListPaginator::new(corridor.page_size)?;
    let (vehicles, incidents, traffic_jams, weather_hazards, road_conditions, forecasts) = tokio::try_join!(
        client.map_icons::<MapIcon>(MapIconLayer::ServiceVehicles),
        client.map_icons::<Value>(MapIconLayer::WazeIncidents),
        client.map_icons::<Value>(MapIconLayer::WazeTraffic),
        client.map_icons::<Value>(MapIconLayer::WazeWeather),
        paginator.fetch_all(client, ListFeedKind::RoadConditions),
        paginator.fetch_all(client, ListFeedKind::ForecastedDrivingConditions),
    )?;

    let relevance = RouteRelevanceFilter::from(corridor);
    let vehicles_near_route = filter_in_corridor(vehicles.iter().cloned(), &corridor.bbox);
    let inputs = ReportInputs {
        route,
        cameras,
        vehicles,
        vehicles_near_route,
        road_conditions: relevance.filter_rows(road_conditions),
        forecasts: relevance.filter_rows(forecasts),
        incidents,
        traffic_jams,
        weather_hazards,
        tile_urls: tile_urls_for_bbox(
            &corridor.bbox,
            corridor.tile_zoom,
            &corridor.tile_url_template,
        ),
    };
    Ok(assemble_report(inputs, corridor, Utc::now()))
}

/// one-line run summary: route time and distance, matched cameras,
/// vehicles near the route and the relevant list row counts.
pub fn summary_line(report: &Report) -> String {
    let primary = &report.route.primary;
    let time = primary
        .time
        .as_ref()
        .map(|t| format!("{} min", t.minutes))
        .unwrap_or_else(|| String::from("unknown time"));
    let distance = primary
        .distance
        .as_ref()
        .map(|d| d.text.clone())
        .unwrap_or_else(|| String::from("unknown distance"));
    format!(
        "{time}, {distance}, {} cameras matched ({} missing), {} service vehicles near route, {} road conditions, {} forecasts",
        report.cameras.matched.len(),
        report.cameras.missing_names.len(),
        report.service_vehicles.near_route_count,
        report.road_conditions.count,
        report.forecasted_driving_conditions.count,
    )
}
